use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
///
/// A normal run shows this crate's `info` events, which include per-page
/// progress while followings are fetched. `--quiet` keeps errors only.
pub fn default_filter(quiet: bool) -> &'static str {
    if quiet { "error" } else { "soundcloud_filter=info,warn" }
}

/// Installs the global `tracing` subscriber, writing to stderr so stdout stays
/// reserved for results.
///
/// `RUST_LOG` wins over `default_filter`. Calling this twice is a no-op.
pub fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
