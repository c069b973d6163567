use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A row from the simulated user directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A randomly valued item used by the effect and memo demos.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleItem {
    pub id: u32,
    pub name: String,
    /// Uniform in `[0, 1)`.
    pub value: f64,
}

/// What the generic "fetch a resource" demo gets back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPayload {
    pub resource: String,
    pub message: String,
    pub fetched_at: DateTime<Utc>,
    pub items: Vec<String>,
}

/// Build sample item `id` with a fresh random value.
#[must_use]
pub fn random_sample(id: u32) -> SampleItem {
    SampleItem {
        id,
        name: format!("Item {id}"),
        value: rand::rng().random::<f64>(),
    }
}

/// The "expensive" derived value the memo demo caches.
#[must_use]
pub fn sum_values(items: &[SampleItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_samples_are_unit_interval() {
        for id in 1..=50 {
            let item = random_sample(id);
            assert_eq!(item.id, id);
            assert_eq!(item.name, format!("Item {id}"));
            assert!((0.0..1.0).contains(&item.value));
        }
    }

    #[test]
    fn sum_values_adds_every_item() {
        let items = vec![
            SampleItem { id: 1, name: "a".into(), value: 0.25 },
            SampleItem { id: 2, name: "b".into(), value: 0.5 },
        ];
        assert!((sum_values(&items) - 0.75).abs() < f64::EPSILON);
        assert!(sum_values(&[]).abs() < f64::EPSILON);
    }
}
