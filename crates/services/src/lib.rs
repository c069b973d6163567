#![forbid(unsafe_code)]

pub mod app_services;
pub mod demo_api;
pub mod error;
pub mod samples;
pub mod source;

pub use mastery_core::Clock;

pub use app_services::{AppServices, ServicesConfig};
pub use demo_api::{DemoApi, Latency, SAMPLE_BATCH};
pub use error::{FetchError, ServicesError};
pub use samples::{ApiPayload, DirectoryUser, SampleItem, random_sample, sum_values};
pub use source::{DemoSource, FixtureSource};
