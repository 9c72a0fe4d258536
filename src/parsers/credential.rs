use regex::Regex;
use reqwest::Url;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;

static CLIENT_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"client_id[=:]["']([a-zA-Z0-9]+)["']"#).expect("client_id pattern is valid")
});

static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script[src]").expect("script selector is valid"));

/// Returns the `<script src>` URLs of a page that are served from `asset_host`,
/// in document order.
///
/// Relative sources are resolved against `base`. A script matches when its
/// host equals `asset_host` or is a subdomain of it.
pub fn script_sources(html: &str, base: &Url, asset_host: &str) -> Vec<Url> {
    let document = Html::parse_document(html);

    document
        .select(&SCRIPT_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .filter_map(|src| base.join(src.trim()).ok())
        .filter(|url| is_asset_host(url, asset_host))
        .collect()
}

fn is_asset_host(url: &Url, asset_host: &str) -> bool {
    match url.host_str() {
        Some(host) => {
            host == asset_host
                || host
                    .strip_suffix(asset_host)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        }
        None => false,
    }
}

/// Searches a script body for an embedded `client_id="..."` or `client_id:"..."`.
pub fn find_client_id(script_body: &str) -> Option<String> {
    CLIENT_ID_PATTERN
        .captures(script_body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Finds the client_id given a page and the bodies of the scripts it loads.
///
/// Scripts are checked in document order; the first token wins. Scripts with
/// no entry in `script_bodies` (e.g. they failed to download) are skipped.
pub fn extract_client_id(
    html: &str,
    base: &Url,
    asset_host: &str,
    script_bodies: &HashMap<Url, String>,
) -> Option<String> {
    script_sources(html, base, asset_host)
        .iter()
        .filter_map(|url| script_bodies.get(url))
        .find_map(|body| find_client_id(body))
}
