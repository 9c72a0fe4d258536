#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use soundcloud_filter::{ClientConfig, Throttle};
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::MockServer;

/// Points every endpoint at the mock server. Scripts served by the mock
/// server count as static assets.
pub fn config_for(server: &MockServer, client_id: Option<&str>) -> ClientConfig {
    ClientConfig {
        api_base_url: server.uri(),
        web_base_url: server.uri(),
        asset_host: "127.0.0.1".to_string(),
        client_id: client_id.map(str::to_string),
        page_delay_ms: 0,
        ..Default::default()
    }
}

/// Records how often the client paused between pages.
#[derive(Default)]
pub struct CountingThrottle {
    pauses: AtomicUsize,
}

impl CountingThrottle {
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Throttle for CountingThrottle {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

/// Fake user records with sequential ids.
pub fn users(ids: Range<u64>) -> Vec<Value> {
    ids.map(|id| {
        json!({
            "id": id,
            "permalink": format!("user{}", id),
            "city": if id % 2 == 0 { Value::from("Berlin") } else { Value::Null },
            "followers_count": id * 10,
        })
    })
    .collect()
}
