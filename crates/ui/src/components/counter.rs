use dioxus::prelude::*;
use mastery_core::demos::StepCounter;

use super::{Button, ButtonVariant};

/// A self-contained counter: each instance owns its own state.
#[component]
pub fn StepCounterCard(initial: i64) -> Element {
    let mut counter = use_signal(|| StepCounter::new(initial, 1));
    let value = counter.read().value();
    let step = counter.read().step();

    rsx! {
        div { class: "counter",
            h3 { "Count: {value}" }
            div { class: "counter-controls",
                Button { variant: ButtonVariant::Danger, onclick: move |_| counter.write().decrement(), "➖ Decrease" }
                Button { variant: ButtonVariant::Secondary, onclick: move |_| counter.write().reset(), "🔄 Reset" }
                Button { variant: ButtonVariant::Success, onclick: move |_| counter.write().increment(), "➕ Increase" }
            }
            div { class: "counter-info",
                small { "Initial value: {initial} | Step: {step}" }
            }
        }
    }
}
