mod state_demos;

use dioxus::prelude::*;
use mastery_core::model::fundamentals_lessons;

use crate::components::{Card, LessonList, StepCounterCard, TabBar};

use state_demos::StateDemos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FundamentalsTab {
    Components,
    State,
    Lessons,
}

impl FundamentalsTab {
    const ALL: [FundamentalsTab; 3] = [Self::Components, Self::State, Self::Lessons];

    fn label(self) -> &'static str {
        match self {
            Self::Components => "🧩 Components",
            Self::State => "📦 State",
            Self::Lessons => "📚 Lessons",
        }
    }
}

#[component]
pub fn FundamentalsView() -> Element {
    let mut active = use_signal(|| FundamentalsTab::Components);
    let labels = FundamentalsTab::ALL.iter().map(|tab| tab.label()).collect::<Vec<_>>();
    let active_index = FundamentalsTab::ALL
        .iter()
        .position(|tab| *tab == active())
        .unwrap_or(0);

    rsx! {
        div { class: "page fundamentals-page",
            h1 { "📚 Fundamentals" }
            TabBar {
                labels,
                active: active_index,
                on_select: move |index: usize| {
                    if let Some(tab) = FundamentalsTab::ALL.get(index) {
                        active.set(*tab);
                    }
                },
            }
            div { class: "tab-content",
                match active() {
                    FundamentalsTab::Components => rsx! { ComponentsTab {} },
                    FundamentalsTab::State => rsx! { StateDemos {} },
                    FundamentalsTab::Lessons => rsx! {
                        LessonList { title: "Fundamentals lessons", lessons: fundamentals_lessons() }
                    },
                }
            }
        }
    }
}

#[component]
fn ComponentsTab() -> Element {
    rsx! {
        div { class: "components-demo",
            Card { title: "Independent counters", subtitle: "Same component, separate state",
                div { class: "counters-row",
                    StepCounterCard { initial: 0 }
                    StepCounterCard { initial: 10 }
                    StepCounterCard { initial: -5 }
                }
            }
            Card { title: "Props",
                p { "Each counter receives its starting value and step from its parent." }
                p { "Changing one counter never touches the others." }
            }
        }
    }
}
