use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::FetchError;
use crate::samples::{ApiPayload, DirectoryUser, SampleItem, random_sample};

/// Where simulated fetches get their data. Latency is applied by `DemoApi`,
/// not by the source.
#[async_trait]
pub trait DemoSource: Send + Sync {
    async fn directory_users(&self) -> Result<Vec<DirectoryUser>, FetchError>;

    async fn sample_items(&self, count: u32) -> Result<Vec<SampleItem>, FetchError>;

    async fn payload(
        &self,
        resource: &str,
        now: DateTime<Utc>,
    ) -> Result<ApiPayload, FetchError>;
}

/// Hardcoded data; never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureSource;

#[async_trait]
impl DemoSource for FixtureSource {
    async fn directory_users(&self) -> Result<Vec<DirectoryUser>, FetchError> {
        let users = [
            (1, "Ali Mohammadi", "ali@example.com"),
            (2, "Sara Ahmadi", "sara@example.com"),
            (3, "Mohammad Rezaei", "mohammad@example.com"),
        ];
        Ok(users
            .into_iter()
            .map(|(id, name, email)| DirectoryUser {
                id,
                name: name.to_string(),
                email: email.to_string(),
            })
            .collect())
    }

    async fn sample_items(&self, count: u32) -> Result<Vec<SampleItem>, FetchError> {
        Ok((1..=count).map(random_sample).collect())
    }

    async fn payload(
        &self,
        resource: &str,
        now: DateTime<Utc>,
    ) -> Result<ApiPayload, FetchError> {
        Ok(ApiPayload {
            resource: resource.to_string(),
            message: "Data received from the API".to_string(),
            fetched_at: now,
            items: vec!["Item 1".into(), "Item 2".into(), "Item 3".into()],
        })
    }
}
