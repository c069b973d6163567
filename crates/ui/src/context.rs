use std::sync::Arc;

use mastery_core::store::AppState;
use services::DemoApi;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    /// Snapshot the state container starts from.
    fn initial_state(&self) -> AppState;

    fn demo_api(&self) -> Arc<DemoApi>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_state: AppState,
    demo_api: Arc<DemoApi>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_state: app.initial_state(),
            demo_api: app.demo_api(),
        }
    }

    #[must_use]
    pub fn initial_state(&self) -> AppState {
        self.initial_state.clone()
    }

    #[must_use]
    pub fn demo_api(&self) -> Arc<DemoApi> {
        Arc::clone(&self.demo_api)
    }
}

// Provided by the application composition root (`crates/app`) via
// `LaunchBuilder::with_context`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
