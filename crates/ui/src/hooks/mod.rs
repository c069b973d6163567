//! Reusable stateful hooks shared by the effect demos.

mod ref_slot;
mod scripts;

use std::sync::Arc;

use dioxus::prelude::*;
use mastery_core::demos::{KeyHistory, ViewportSize};
use services::{ApiPayload, DemoApi};

use crate::views::{ViewError, ViewState, view_state_from_resource};

pub use ref_slot::RefSlot;

use scripts::{WindowEvent, attach_listener_script, detach_listener_script};

/// Live window size. The resize listener is attached when the calling
/// component mounts and removed when it unmounts.
pub fn use_viewport_size(slot: &'static str) -> Signal<ViewportSize> {
    let mut size = use_signal(ViewportSize::default);

    use_future(move || async move {
        let mut listener = document::eval(&attach_listener_script(slot, WindowEvent::Resize));
        while let Ok(next) = listener.recv::<ViewportSize>().await {
            size.set(next);
        }
    });

    use_drop(move || {
        let _ = document::eval(&detach_listener_script(slot, WindowEvent::Resize));
    });

    size
}

/// Keys pressed anywhere in the window while the caller is mounted.
pub fn use_key_history(slot: &'static str) -> Signal<KeyHistory> {
    let mut history = use_signal(KeyHistory::default);

    use_future(move || async move {
        let mut listener = document::eval(&attach_listener_script(slot, WindowEvent::KeyDown));
        while let Ok(key) = listener.recv::<String>().await {
            history.write().record(key);
        }
    });

    use_drop(move || {
        let _ = document::eval(&detach_listener_script(slot, WindowEvent::KeyDown));
    });

    history
}

/// Loading/error/ready state of a simulated request plus a way to re-run it.
#[derive(Clone, Copy)]
pub struct ApiHandle {
    resource: Resource<Result<ApiPayload, ViewError>>,
}

impl ApiHandle {
    #[must_use]
    pub fn state(&self) -> ViewState<ApiPayload> {
        view_state_from_resource(self.resource)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.resource.state().cloned(), UseResourceState::Pending)
    }

    pub fn refetch(&mut self) {
        self.resource.restart();
    }
}

/// Fetch `path` from the simulated backend once on mount.
pub fn use_api_payload(api: Arc<DemoApi>, path: &'static str) -> ApiHandle {
    let resource = use_resource(move || {
        let api = api.clone();
        async move {
            api.fetch_payload(path)
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });
    ApiHandle { resource }
}
