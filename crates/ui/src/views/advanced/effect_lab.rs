//! Effects with real cleanup: a ticking timer, a directory fetch, window
//! listeners and a custom data hook.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use mastery_core::demos::Stopwatch;

use crate::components::{Button, ButtonSize, ButtonVariant, Card};
use crate::context::AppContext;
use crate::hooks::{use_api_payload, use_key_history, use_viewport_size};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::format_timestamp;

#[component]
pub(crate) fn EffectLab() -> Element {
    rsx! {
        div { class: "effect-lab",
            TimerCard {}
            DirectoryCard {}
            WindowSizeCard {}
            KeyTrackerCard {}
            PayloadCard {}
        }
    }
}

#[component]
fn TimerCard() -> Element {
    let mut watch = use_signal(Stopwatch::default);
    let mut ticker = use_signal(|| None::<Task>);
    let running = use_memo(move || watch.read().is_running());

    // Restarted whenever the running flag flips; the previous task is
    // cancelled first so at most one ticker exists.
    use_effect(move || {
        let running = running();
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        if running {
            let task = spawn(async move {
                loop {
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    watch.write().tick();
                }
            });
            ticker.set(Some(task));
        }
    });

    let seconds = watch.read().seconds();
    let toggle_label = if running() { "⏸ Pause" } else { "▶ Start" };

    rsx! {
        Card { title: "⏱ Timer",
            h3 { class: "timer", "{seconds} s" }
            div { class: "counter-controls",
                Button { variant: ButtonVariant::Primary, onclick: move |_| watch.write().toggle(), "{toggle_label}" }
                Button { variant: ButtonVariant::Secondary, onclick: move |_| watch.write().reset(), "🔄 Reset" }
            }
        }
    }
}

#[component]
fn DirectoryCard() -> Element {
    let api = use_context::<AppContext>().demo_api();
    let mut users = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_users().await.map_err(|_| ViewError::Unknown) }
    });

    rsx! {
        Card { title: "👥 User directory",
            match view_state_from_resource(users) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "⏳ Loading users..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(list) => rsx! {
                    ul { class: "user-list",
                        for user in list {
                            li { key: "{user.id}",
                                strong { "{user.name}" }
                                " "
                                small { "{user.email}" }
                            }
                        }
                    }
                },
            }
            Button {
                size: ButtonSize::Sm,
                loading: matches!(users.state().cloned(), UseResourceState::Pending),
                onclick: move |_| users.restart(),
                "🔄 Refetch"
            }
        }
    }
}

#[component]
fn WindowSizeCard() -> Element {
    let size = use_viewport_size("effect-lab");
    let current = size();
    let category = current.category().label();

    rsx! {
        Card { title: "📐 Window size",
            p { "{current.width} × {current.height}" }
            p { class: "size-category", "Category: {category}" }
        }
    }
}

#[component]
fn KeyTrackerCard() -> Element {
    let mut history = use_key_history("effect-lab");
    let snapshot = history.read().clone();
    let current = snapshot.current().unwrap_or("none").to_string();

    rsx! {
        Card { title: "⌨️ Key presses",
            p { "Last key: " strong { "{current}" } }
            div { class: "key-history",
                for (index, key) in snapshot.recent().iter().enumerate() {
                    span { key: "{index}", class: "key-chip", "{key}" }
                }
            }
            Button { size: ButtonSize::Sm, variant: ButtonVariant::Secondary, onclick: move |_| history.write().clear(), "Clear" }
        }
    }
}

#[component]
fn PayloadCard() -> Element {
    let api = use_context::<AppContext>().demo_api();
    let mut handle = use_api_payload(api, "/api/lessons");

    rsx! {
        Card { title: "🪝 Custom data hook",
            match handle.state() {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "⏳ Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(payload) => rsx! {
                    p { "{payload.message}" }
                    small { "{payload.resource} · {format_timestamp(payload.fetched_at)}" }
                    ul {
                        for item in payload.items {
                            li { "{item}" }
                        }
                    }
                },
            }
            Button {
                size: ButtonSize::Sm,
                loading: handle.is_pending(),
                onclick: move |_| handle.refetch(),
                "🔄 Refetch"
            }
        }
    }
}
