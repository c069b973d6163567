mod advanced;
mod fundamentals;
mod home;
mod projects;
mod state;

pub use advanced::AdvancedHooksView;
pub use fundamentals::FundamentalsView;
pub use home::HomeView;
pub use projects::ProjectsView;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
