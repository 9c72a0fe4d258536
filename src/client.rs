use crate::error::{ApiError, Result};
use crate::models::{AccountRecord, ClientConfig, FollowingsPage};
use crate::parsers;
use crate::throttle::{FixedDelay, Throttle};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Client for SoundCloud's public (undocumented) v2 API.
///
/// One instance owns one HTTP session and caches the client_id it discovers,
/// so it should be reused for all calls made on behalf of one run.
pub struct SoundcloudClient {
    client: reqwest::Client,
    config: ClientConfig,
    client_id: OnceCell<String>,
    throttle: Arc<dyn Throttle>,
}

impl SoundcloudClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);

        // No timeout unless asked for: a stalled server stalls the run.
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            // An empty id counts as unset and falls through to discovery.
            client_id: OnceCell::new_with(config.client_id.clone().filter(|id| !id.is_empty())),
            throttle: Arc::new(FixedDelay::from_millis(config.page_delay_ms)),
            config,
        })
    }

    /// Replaces the pacing applied between followings pages.
    pub fn set_throttle(&mut self, throttle: Arc<dyn Throttle>) {
        self.throttle = throttle;
    }

    /// Returns the client_id used for API calls.
    ///
    /// A client_id given in the config is returned as-is without touching the
    /// network. Otherwise it is scraped from the website's scripts on first use
    /// and cached for the lifetime of this client.
    pub async fn client_id(&self) -> Result<&str> {
        self.client_id
            .get_or_try_init(|| self.discover_client_id())
            .await
            .map(String::as_str)
    }

    async fn discover_client_id(&self) -> Result<String> {
        let page_url = parse_url(&self.config.web_base_url)?;
        let response = self.get(page_url).await?;
        let base = response.url().clone();
        let html = response.text().await?;

        let scripts =
            parsers::credential::script_sources(&html, &base, &self.config.asset_host);
        tracing::debug!(count = scripts.len(), "scanning asset scripts for client_id");

        for script_url in scripts {
            let body = match self.get_text(script_url.clone()).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(url = %script_url, error = %e, "skipping script");
                    continue;
                }
            };

            if let Some(client_id) = parsers::credential::find_client_id(&body) {
                tracing::info!(script = %script_url, "discovered client_id");
                return Ok(client_id);
            }
        }

        Err(ApiError::CredentialNotFound)
    }

    /// Resolves a handle (e.g. `"gloomweaver777"`) to the user's record.
    pub async fn resolve_user(&self, handle: &str) -> Result<AccountRecord> {
        let client_id = self.client_id().await?;
        let profile_url = format!("{}/{}", self.config.web_base_url.trim_end_matches('/'), handle);

        let url = Url::parse_with_params(
            &self.api_url("resolve"),
            &[("url", profile_url.as_str()), ("client_id", client_id)],
        )
        .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        match self.get_json(url).await {
            Err(ApiError::StatusError {
                status: StatusCode::NOT_FOUND,
                ..
            }) => Err(ApiError::NotFound(handle.to_string())),
            other => other,
        }
    }

    /// Fetches every account `user_id` follows, walking `next_href` cursors
    /// until the last page.
    ///
    /// Records come back in server order without deduplication. Any failed
    /// page fails the whole call.
    pub async fn get_followings(&self, user_id: u64, page_size: u32) -> Result<Vec<AccountRecord>> {
        let client_id = self.client_id().await?;
        let mut followings = Vec::new();
        let mut next = Some(self.api_url(&format!("users/{}/followings", user_id)));

        while let Some(target) = next.take() {
            let mut url = parse_url(&target)?;

            // Cursor URLs already carry everything the server needs.
            if url.query().is_none() {
                url.query_pairs_mut()
                    .append_pair("client_id", client_id)
                    .append_pair("limit", &page_size.to_string());
            }

            let page: FollowingsPage = self.get_json(url).await?;
            followings.extend(page.collection);
            tracing::info!(user_id, fetched = followings.len(), "fetched followings page");

            if let Some(href) = page.next_href.filter(|href| !href.is_empty()) {
                self.throttle.pause().await;
                next = Some(href);
            }
        }

        Ok(followings)
    }

    /// Resolves `handle` and fetches everyone it follows.
    pub async fn get_followings_by_handle(&self, handle: &str) -> Result<Vec<AccountRecord>> {
        let user = self.resolve_user(handle).await?;
        let user_id = user.id().ok_or(ApiError::MissingField("id"))?;
        tracing::debug!(handle, user_id, "resolved user");

        self.get_followings(user_id, self.config.page_size).await
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response> {
        tracing::debug!(path = url.path(), "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let mut url = response.url().clone();
            url.set_query(None);
            return Err(ApiError::StatusError {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }

    async fn get_text(&self, url: Url) -> Result<String> {
        Ok(self.get(url).await?.text().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))
}
