mod effect_lab;
mod hook_demos;
mod workshop;

use dioxus::prelude::*;
use mastery_core::model::advanced_lessons;

use crate::components::{LessonList, TabBar};

pub(crate) use effect_lab::EffectLab;
use hook_demos::{CallbackDemo, EffectsDemo, MemoDemo, RefDemo};
pub(crate) use workshop::WorkshopDemo;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdvancedTab {
    Effects,
    Memo,
    Callback,
    Ref,
    EffectLab,
    Context,
    Lessons,
}

impl AdvancedTab {
    const ALL: [AdvancedTab; 7] = [
        Self::Effects,
        Self::Memo,
        Self::Callback,
        Self::Ref,
        Self::EffectLab,
        Self::Context,
        Self::Lessons,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Effects => "⚡ Effects",
            Self::Memo => "🧠 Memo",
            Self::Callback => "🔁 Callback",
            Self::Ref => "📌 Ref",
            Self::EffectLab => "🧪 Effect lab",
            Self::Context => "🌐 Context",
            Self::Lessons => "📚 Lessons",
        }
    }
}

#[component]
pub fn AdvancedHooksView() -> Element {
    let mut active = use_signal(|| AdvancedTab::Effects);
    let labels = AdvancedTab::ALL.iter().map(|tab| tab.label()).collect::<Vec<_>>();
    let active_index = AdvancedTab::ALL
        .iter()
        .position(|tab| *tab == active())
        .unwrap_or(0);

    rsx! {
        div { class: "page advanced-page",
            h1 { "⚡ Advanced hooks" }
            TabBar {
                labels,
                active: active_index,
                on_select: move |index: usize| {
                    if let Some(tab) = AdvancedTab::ALL.get(index) {
                        active.set(*tab);
                    }
                },
            }
            // Only the active tab is mounted, so its listeners and fetches
            // start on show and are dropped on switch.
            div { class: "tab-content",
                match active() {
                    AdvancedTab::Effects => rsx! { EffectsDemo {} },
                    AdvancedTab::Memo => rsx! { MemoDemo {} },
                    AdvancedTab::Callback => rsx! { CallbackDemo {} },
                    AdvancedTab::Ref => rsx! { RefDemo {} },
                    AdvancedTab::EffectLab => rsx! { EffectLab {} },
                    AdvancedTab::Context => rsx! { WorkshopDemo {} },
                    AdvancedTab::Lessons => rsx! {
                        LessonList { title: "Advanced lessons", lessons: advanced_lessons() }
                    },
                }
            }
        }
    }
}
