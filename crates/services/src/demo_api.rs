use std::sync::Arc;
use std::time::Duration;

use mastery_core::Clock;

use crate::error::FetchError;
use crate::samples::{ApiPayload, DirectoryUser, SampleItem};
use crate::source::{DemoSource, FixtureSource};

/// Number of sample items the effect demo loads.
pub const SAMPLE_BATCH: u32 = 3;

/// Fixed delay applied to every simulated request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latency(Duration);

impl Latency {
    pub const DEFAULT: Latency = Latency(Duration::from_millis(1000));
    pub const NONE: Latency = Latency(Duration::ZERO);

    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    #[must_use]
    pub const fn duration(self) -> Duration {
        self.0
    }

    /// The directory fetch is the slow endpoint: twice the base delay.
    #[must_use]
    pub fn slow(self) -> Duration {
        self.0.saturating_mul(2)
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Simulated backend: a data source behind a fixed delay.
#[derive(Clone)]
pub struct DemoApi {
    clock: Clock,
    latency: Latency,
    source: Arc<dyn DemoSource>,
}

impl DemoApi {
    #[must_use]
    pub fn new(clock: Clock, latency: Latency, source: Arc<dyn DemoSource>) -> Self {
        Self {
            clock,
            latency,
            source,
        }
    }

    /// Fixture data with the given delay.
    #[must_use]
    pub fn fixtures(clock: Clock, latency: Latency) -> Self {
        Self::new(clock, latency, Arc::new(FixtureSource))
    }

    #[must_use]
    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Load the user directory after the slow delay.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the source fails.
    pub async fn fetch_users(&self) -> Result<Vec<DirectoryUser>, FetchError> {
        wait(self.latency.slow()).await;
        let result = self.source.directory_users().await;
        log_outcome("users", result.as_ref().map(Vec::len));
        result
    }

    /// Load a fresh batch of randomly valued sample items.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the source fails.
    pub async fn fetch_samples(&self) -> Result<Vec<SampleItem>, FetchError> {
        wait(self.latency.duration()).await;
        let result = self.source.sample_items(SAMPLE_BATCH).await;
        log_outcome("samples", result.as_ref().map(Vec::len));
        result
    }

    /// Load the generic payload for `resource`, stamped with the clock.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the source fails.
    pub async fn fetch_payload(&self, resource: &str) -> Result<ApiPayload, FetchError> {
        wait(self.latency.duration()).await;
        let result = self.source.payload(resource, self.clock.now()).await;
        log_outcome("payload", result.as_ref().map(|payload| payload.items.len()));
        result
    }
}

async fn wait(delay: std::time::Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn log_outcome(endpoint: &str, outcome: Result<usize, &FetchError>) {
    match outcome {
        Ok(count) => tracing::debug!(endpoint, count, "simulated fetch resolved"),
        Err(err) => tracing::warn!(endpoint, %err, "simulated fetch failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mastery_core::time::{fixed_clock, fixed_now};

    fn api() -> DemoApi {
        DemoApi::fixtures(fixed_clock(), Latency::NONE)
    }

    #[tokio::test]
    async fn fetch_users_returns_three_fixture_users() {
        let users = api().fetch_users().await.unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].email, "ali@example.com");
    }

    #[tokio::test]
    async fn fetch_samples_returns_a_batch() {
        let items = api().fetch_samples().await.unwrap();
        let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn fetch_payload_is_stamped_by_clock() {
        let payload = api().fetch_payload("/lessons").await.unwrap();
        assert_eq!(payload.resource, "/lessons");
        assert_eq!(payload.fetched_at, fixed_now());
        assert_eq!(payload.items.len(), 3);
    }

    #[test]
    fn slow_latency_doubles() {
        assert_eq!(Latency::from_millis(250).slow(), Duration::from_millis(500));
        assert_eq!(Latency::default().duration(), Duration::from_millis(1000));
    }
}
