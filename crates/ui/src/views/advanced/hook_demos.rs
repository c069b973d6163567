use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use mastery_core::demos::ViewportSize;
use services::{SAMPLE_BATCH, SampleItem, random_sample, sum_values};

use crate::components::{Button, ButtonSize, ButtonVariant, Card};
use crate::context::AppContext;
use crate::hooks::{RefSlot, use_viewport_size};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{format_total, map_sample_rows};

fn seed_samples() -> Vec<SampleItem> {
    (1..=SAMPLE_BATCH).map(random_sample).collect()
}

#[component]
pub(super) fn EffectsDemo() -> Element {
    let api = use_context::<AppContext>().demo_api();
    let mut size = use_viewport_size("effects");
    let samples = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_samples().await.map_err(|_| ViewError::Unknown) }
    });
    let current = size();

    rsx! {
        div { class: "effects-demo",
            Card { title: "Window size", subtitle: "Listener attached on mount",
                p { class: "viewport-size", "{current.width} × {current.height}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| size.set(ViewportSize::default()),
                    "Reset size"
                }
            }
            Card { title: "Data on mount",
                match view_state_from_resource(samples) {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "loading", "⏳ Loading..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "error", "{err.message()}" }
                    },
                    ViewState::Ready(items) => rsx! {
                        ul { class: "sample-list",
                            for row in map_sample_rows(&items) {
                                li { key: "{row.id}", "{row.label}" }
                            }
                        }
                    },
                }
            }
            Card { title: "Cleanup",
                p { "Listeners and timers started by a component are released when it unmounts." }
                p { "Switch tabs and come back: the data above is fetched again." }
            }
        }
    }
}

#[component]
pub(super) fn MemoDemo() -> Element {
    let mut samples = use_signal(seed_samples);
    let mut clicks = use_signal(|| 0_u32);
    let total = use_memo(move || {
        let items = samples.read();
        tracing::debug!(count = items.len(), "recomputing sample total");
        sum_values(&items)
    });
    let rows = map_sample_rows(&samples.read());

    rsx! {
        Card { title: "Memoized total", subtitle: "Recomputed only when the list changes",
            ul { class: "sample-list",
                for row in rows {
                    li { key: "{row.id}", "{row.label}" }
                }
            }
            p { class: "memo-total", "Total: {format_total(total())}" }
            div { class: "counter-controls",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        let next_id = samples.peek().iter().map(|item| item.id).max().unwrap_or(0) + 1;
                        samples.write().push(random_sample(next_id));
                    },
                    "➕ Add item"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| clicks += 1,
                    "Unrelated re-render ({clicks})"
                }
            }
        }
    }
}

#[component]
pub(super) fn CallbackDemo() -> Element {
    let samples = use_signal(seed_samples);
    let mut last_clicked = use_signal(|| None::<u32>);
    let on_item_click = use_callback(move |id: u32| last_clicked.set(Some(id)));
    let counter_ref = use_hook(|| Rc::new(Cell::new(0_u32)));
    let rows = map_sample_rows(&samples.read());

    rsx! {
        div { class: "callback-demo",
            Card { title: "Stable handler",
                for row in rows {
                    Button {
                        key: "{row.id}",
                        size: ButtonSize::Sm,
                        onclick: move |_| on_item_click.call(row.id),
                        "{row.label}"
                    }
                }
                match last_clicked() {
                    Some(id) => rsx! { p { "Last clicked: item {id}" } },
                    None => rsx! { p { "Nothing clicked yet" } },
                }
            }
            Card { title: "Mutable ref",
                p { "Incrementing the ref does not re-render; check the log." }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: {
                        let counter_ref = Rc::clone(&counter_ref);
                        move |_| {
                            counter_ref.set(counter_ref.get() + 1);
                            tracing::info!(value = counter_ref.get(), "ref counter bumped");
                        }
                    },
                    "Bump ref"
                }
            }
        }
    }
}

#[component]
pub(super) fn RefDemo() -> Element {
    let mut input = use_signal(|| None::<Rc<MountedData>>);
    let bumps = use_hook(|| Rc::new(Cell::new(0_u32)));
    let mut ticks = use_signal(|| 0_u32);
    let ticker = use_hook(RefSlot::<Task>::default);

    rsx! {
        div { class: "ref-demo",
            Card { title: "Element handle",
                input {
                    r#type: "text",
                    placeholder: "Focus me from the button",
                    onmounted: move |evt| input.set(Some(evt.data())),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        let handle = input.peek().clone();
                        if let Some(handle) = handle {
                            spawn(async move {
                                if let Err(err) = handle.set_focus(true).await {
                                    tracing::debug!(?err, "focus request failed");
                                }
                            });
                        }
                    },
                    "🎯 Focus input"
                }
            }
            Card { title: "Ref counter",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: {
                        let bumps = Rc::clone(&bumps);
                        move |_| {
                            bumps.set(bumps.get() + 1);
                            tracing::info!(value = bumps.get(), "ref counter bumped");
                        }
                    },
                    "Bump ref"
                }
            }
            Card { title: "Interval",
                h3 { "Ticks: {ticks}" }
                div { class: "counter-controls",
                    Button {
                        variant: ButtonVariant::Success,
                        onclick: {
                            let ticker = ticker.clone();
                            move |_| {
                                ticker.fill_with(|| {
                                    spawn(async move {
                                        loop {
                                            tokio::time::sleep(Duration::from_secs(1)).await;
                                            ticks += 1;
                                        }
                                    })
                                });
                            }
                        },
                        "▶ Start"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| {
                            if let Some(task) = ticker.take() {
                                task.cancel();
                            }
                        },
                        "⏹ Stop"
                    }
                }
            }
        }
    }
}
