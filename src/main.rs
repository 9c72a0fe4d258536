use anyhow::{Context, Result};
use clap::Parser;
use soundcloud_filter::{ClientConfig, SoundcloudClient, display, filter, logging};
use std::process::ExitCode;

/// 🎵 Find SoundCloud users by location
#[derive(Parser, Debug)]
#[command(
    name = "sc-filter",
    version,
    about,
    after_help = "Examples:\n  sc-filter gloomweaver777 Tbilisi\n  sc-filter gloomweaver777 Berlin\n  sc-filter gloomweaver777 \"New York\""
)]
struct Cli {
    /// SoundCloud username to analyze
    username: String,

    /// Location to filter (e.g. "Berlin", "Georgia")
    location: String,

    /// Minimal output
    #[arg(long)]
    quiet: bool,

    /// Use this client_id instead of scraping one from soundcloud.com
    #[arg(long, env = "SOUNDCLOUD_CLIENT_ID")]
    client_id: Option<String>,

    /// Followings requested per page
    #[arg(long, default_value_t = 200)]
    page_size: u32,

    /// Pause between page requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Give up on a request after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            client_id: self.client_id.clone(),
            page_size: self.page_size,
            page_delay_ms: self.delay_ms,
            request_timeout_ms: self.timeout_secs.map(|s| s.saturating_mul(1000)),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(logging::default_filter(cli.quiet));

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("✗ Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether any user matched.
async fn run(cli: &Cli) -> Result<bool> {
    let verbose = !cli.quiet;

    if verbose {
        println!("{}", display::render_header(&cli.username, &cli.location));
        println!("⏳ Fetching followings from SoundCloud API...");
    }

    let client =
        SoundcloudClient::with_config(cli.client_config()).context("could not build HTTP client")?;
    let followings = client.get_followings_by_handle(&cli.username).await?;

    if verbose {
        println!("✓ Found {} followings\n", followings.len());
        println!("⏳ Processing location data...");
        println!(
            "✓ {}/{} users have location data\n",
            filter::count_with_location(&followings),
            followings.len()
        );
        println!("⏳ Filtering for '{}'...", cli.location);
    }

    let matched = filter::filter_by_location(&followings, &cli.location);

    if verbose {
        println!("✓ Found {} matches\n", matched.len());
    }

    print!("{}", display::render_results(&matched, &cli.location));

    Ok(!matched.is_empty())
}
