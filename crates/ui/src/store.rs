//! Context-provided handle to the application state container.

use dioxus::prelude::*;
use mastery_core::store::{Action, AppState};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("the app store was used outside of its provider")]
    MissingProvider,
}

/// Current snapshot plus `dispatch`. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct AppStore {
    state: Signal<AppState>,
}

impl AppStore {
    /// Clone of the current snapshot; subscribes the calling component.
    #[must_use]
    pub fn state(&self) -> AppState {
        self.state.cloned()
    }

    /// Replace the snapshot with the one `action` produces.
    pub fn dispatch(&self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        let mut state = self.state;
        let next = state.peek().reduce(action);
        state.set(next);
    }
}

/// Mount the store for this component and its children.
pub fn use_app_store_provider(initial: impl FnOnce() -> AppState) -> AppStore {
    use_context_provider(|| AppStore {
        state: Signal::new(initial()),
    })
}

/// The store provided by an ancestor.
///
/// # Panics
///
/// Panics when no ancestor mounted the store. That is a wiring mistake in the
/// component tree, not a runtime condition.
#[must_use]
pub fn use_app_store() -> AppStore {
    use_hook(|| match try_app_store() {
        Ok(store) => store,
        Err(err) => panic!("{err}: mount `use_app_store_provider` above this component"),
    })
}

/// Like `use_app_store`, but reports a missing provider instead of panicking.
///
/// # Errors
///
/// Returns `StoreError::MissingProvider` when no ancestor mounted the store.
pub fn try_app_store() -> Result<AppStore, StoreError> {
    try_consume_context::<AppStore>().ok_or(StoreError::MissingProvider)
}
