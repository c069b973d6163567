#![forbid(unsafe_code)]

pub mod demos;
pub mod error;
pub mod model;
pub mod store;
pub mod time;
pub mod workshop;

pub use error::Error;
pub use time::Clock;
