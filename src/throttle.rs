use async_trait::async_trait;
use std::time::Duration;

/// Paces consecutive page requests against the API.
#[async_trait]
pub trait Throttle: Send + Sync {
    /// Called once after each page that has a successor, before requesting it.
    async fn pause(&self);
}

/// Sleeps for the same duration every time.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

#[async_trait]
impl Throttle for FixedDelay {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
