use dioxus::prelude::*;
use dioxus_router::Link;
use mastery_core::model::{CURRICULUM_LESSON_COUNT, ProjectBoard};

use crate::routes::Route;
use crate::store::use_app_store;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "📚",
        title: "Fundamentals",
        description: "Components, props and local state",
    },
    Feature {
        icon: "⚡",
        title: "Advanced hooks",
        description: "Effects, memos, callbacks and refs",
    },
    Feature {
        icon: "💼",
        title: "Practice projects",
        description: "Track real projects from idea to done",
    },
    Feature {
        icon: "🚀",
        title: "Shipping",
        description: "Builds, releases and good habits",
    },
];

fn feature_route(index: usize) -> Route {
    match index {
        0 => Route::Fundamentals {},
        1 => Route::AdvancedHooks {},
        _ => Route::Projects {},
    }
}

#[component]
pub fn HomeView() -> Element {
    let state = use_app_store().state();
    let completed = state.completed_count();
    let percent = state.curriculum_percent();
    let project_count = ProjectBoard::with_samples().len();

    rsx! {
        div { class: "page home-page",
            div { class: "hero-section",
                div { class: "hero-content",
                    h1 { "Welcome to Mastery Hub! 🎉" }
                    p { class: "hero-description", "An interactive playground for UI state management" }
                    match state.user {
                        Some(user) => rsx! {
                            div { class: "welcome-user",
                                p { "Hello " strong { "{user.name}" } "! 👋" }
                                p { "Your progress: " strong { "{completed} lessons" } " completed" }
                            }
                        },
                        None => rsx! {
                            p { "Log in and start your first lesson!" }
                        },
                    }
                }
            }

            div { class: "features-grid",
                for (index, feature) in FEATURES.iter().enumerate() {
                    Link { class: "feature-card", to: feature_route(index),
                        div { class: "feature-icon", "{feature.icon}" }
                        h3 { "{feature.title}" }
                        p { "{feature.description}" }
                        span { class: "feature-link", "Start learning →" }
                    }
                }
            }

            div { class: "stats-overview",
                div { class: "stat-card",
                    h4 { "📖 Lessons" }
                    span { class: "stat-number", "{CURRICULUM_LESSON_COUNT}" }
                }
                div { class: "stat-card",
                    h4 { "⚡ Practice projects" }
                    span { class: "stat-number", "{project_count}" }
                }
                div { class: "stat-card",
                    h4 { "🚀 Your level" }
                    span { class: "stat-number", "{percent}%" }
                }
            }
        }
    }
}
