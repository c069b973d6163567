use std::sync::Arc;

use crate::Clock;
use crate::demo_api::{DemoApi, Latency};
use crate::error::ServicesError;

/// Longest simulated delay accepted at startup.
pub const MAX_LATENCY_MS: u64 = 60_000;

#[derive(Clone, Copy, Debug)]
pub struct ServicesConfig {
    pub clock: Clock,
    pub latency_ms: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            clock: Clock::system(),
            latency_ms: 1000,
        }
    }
}

/// Everything the UI needs from the services layer.
#[derive(Clone)]
pub struct AppServices {
    pub api: Arc<DemoApi>,
}

impl AppServices {
    /// Build the services graph from startup configuration.
    ///
    /// # Errors
    ///
    /// Returns `ServicesError::LatencyOutOfRange` for delays above a minute.
    pub fn build(config: ServicesConfig) -> Result<Self, ServicesError> {
        if config.latency_ms > MAX_LATENCY_MS {
            return Err(ServicesError::LatencyOutOfRange(config.latency_ms));
        }
        let api = DemoApi::fixtures(config.clock, Latency::from_millis(config.latency_ms));
        tracing::info!(latency_ms = config.latency_ms, "services ready");
        Ok(Self { api: Arc::new(api) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_latency_above_a_minute() {
        let config = ServicesConfig {
            latency_ms: MAX_LATENCY_MS + 1,
            ..ServicesConfig::default()
        };
        assert!(matches!(
            AppServices::build(config),
            Err(ServicesError::LatencyOutOfRange(_))
        ));
    }

    #[test]
    fn builds_with_configured_latency() {
        let services = AppServices::build(ServicesConfig {
            latency_ms: 5,
            ..ServicesConfig::default()
        })
        .unwrap();
        assert_eq!(services.api.latency(), Latency::from_millis(5));
    }
}
