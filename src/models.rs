use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A SoundCloud user as returned by the API.
///
/// The payload is kept as-is; no schema is enforced. Accessors for the fields
/// the rest of the crate cares about return `None` when a field is missing,
/// null, or of an unexpected type.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct AccountRecord(Map<String, Value>);

impl AccountRecord {
    /// Raw access to any field of the record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// The numeric user identifier. Some endpoints hand it back as a string.
    pub fn id(&self) -> Option<u64> {
        match self.get("id")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The handle used in profile URLs.
    pub fn permalink(&self) -> Option<&str> {
        self.get_str("permalink")
    }

    pub fn username(&self) -> Option<&str> {
        self.get_str("username")
    }

    pub fn full_name(&self) -> Option<&str> {
        self.get_str("full_name")
    }

    pub fn city(&self) -> Option<&str> {
        self.get_str("city")
    }

    pub fn country_code(&self) -> Option<&str> {
        self.get_str("country_code")
    }

    pub fn followers_count(&self) -> Option<u64> {
        self.get("followers_count").and_then(Value::as_u64)
    }

    pub fn permalink_url(&self) -> Option<&str> {
        self.get_str("permalink_url")
    }

    /// Human-readable location, e.g. `"Berlin, DE"`.
    ///
    /// Built from `city` and `country_code`; `None` when the user has no city.
    pub fn location(&self) -> Option<String> {
        let city = self.city().filter(|c| !c.is_empty())?;
        match self.country_code().filter(|c| !c.is_empty()) {
            Some(code) => Some(format!("{}, {}", city, code)),
            None => Some(city.to_string()),
        }
    }
}

/// One page of a paginated collection endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FollowingsPage {
    /// Records on this page, in server order.
    #[serde(default)]
    pub collection: Vec<AccountRecord>,
    /// Cursor URL for the next page; absent on the last one.
    #[serde(default)]
    pub next_href: Option<String>,
}

/// Settings for [`crate::SoundcloudClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the v2 API.
    pub api_base_url: String,
    /// Base URL of the public website, used for credential discovery and
    /// canonical profile URLs.
    pub web_base_url: String,
    /// Host serving the website's static scripts. Subdomains match too.
    pub asset_host: String,
    /// A known client_id. Discovery is skipped when set.
    pub client_id: Option<String>,
    /// Records requested per followings page.
    pub page_size: u32,
    /// Pause between consecutive page requests, in milliseconds.
    pub page_delay_ms: u64,
    pub user_agent: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    /// Public SoundCloud endpoints, 200 records per page, 500ms between pages.
    fn default() -> Self {
        Self {
            api_base_url: "https://api-v2.soundcloud.com".to_string(),
            web_base_url: "https://soundcloud.com".to_string(),
            asset_host: "sndcdn.com".to_string(),
            client_id: None,
            page_size: 200,
            page_delay_ms: 500,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36"
                .to_string(),
            request_timeout_ms: None,
        }
    }
}
