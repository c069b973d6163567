use std::sync::Arc;

use chrono::{DateTime, Utc};
use mastery_core::time::fixed_clock;
use services::{
    ApiPayload, DemoApi, DemoSource, DirectoryUser, FetchError, Latency, SampleItem, sum_values,
};

struct OfflineSource;

#[async_trait::async_trait]
impl DemoSource for OfflineSource {
    async fn directory_users(&self) -> Result<Vec<DirectoryUser>, FetchError> {
        Err(FetchError::Unavailable("offline".to_string()))
    }

    async fn sample_items(&self, _count: u32) -> Result<Vec<SampleItem>, FetchError> {
        Err(FetchError::Unavailable("offline".to_string()))
    }

    async fn payload(
        &self,
        _resource: &str,
        _now: DateTime<Utc>,
    ) -> Result<ApiPayload, FetchError> {
        Err(FetchError::Unavailable("offline".to_string()))
    }
}

#[tokio::test]
async fn failing_source_surfaces_fetch_errors() {
    let api = DemoApi::new(fixed_clock(), Latency::NONE, Arc::new(OfflineSource));

    let err = api.fetch_users().await.unwrap_err();
    assert_eq!(err, FetchError::Unavailable("offline".to_string()));
    assert!(api.fetch_samples().await.is_err());
    assert!(api.fetch_payload("/anything").await.is_err());
}

#[tokio::test]
async fn fixture_samples_feed_the_memoized_total() {
    let api = DemoApi::fixtures(fixed_clock(), Latency::from_millis(1));
    let items = api.fetch_samples().await.unwrap();
    let total = sum_values(&items);
    assert!((0.0..3.0).contains(&total));
}
