//! Component-local state used by the fundamentals and effects demos.
//!
//! None of this is shared: each view owns its own copy inside a signal.

mod counter;
mod forms;
mod keys;
mod viewport;

pub use counter::{StepCounter, Stopwatch};
pub use forms::{ItemList, ProfileForm, parse_age};
pub use keys::{KEY_HISTORY_LIMIT, KeyHistory};
pub use viewport::{SizeCategory, ViewportSize};
