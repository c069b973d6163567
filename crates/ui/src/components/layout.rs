use dioxus::prelude::*;
use dioxus_router::Link;
use mastery_core::model::{CURRICULUM_LESSON_COUNT, Language, User};
use mastery_core::store::Action;

use crate::routes::Route;
use crate::store::use_app_store;

#[component]
pub fn Header() -> Element {
    let store = use_app_store();
    let state = store.state();
    let toggle_icon = state.theme.toggle_icon();

    rsx! {
        header { class: "header",
            div { class: "header-content",
                div { class: "logo",
                    h1 { "🚀 Mastery Hub" }
                }
                nav { class: "nav",
                    button {
                        class: "theme-toggle",
                        r#type: "button",
                        onclick: move |_| store.dispatch(Action::ToggleTheme),
                        "{toggle_icon}"
                    }
                    select {
                        class: "language-select",
                        value: "{state.language}",
                        onchange: move |evt| {
                            if let Ok(language) = evt.value().parse::<Language>() {
                                store.dispatch(Action::SetLanguage(language));
                            }
                        },
                        for language in [Language::Fa, Language::En] {
                            option {
                                value: "{language}",
                                selected: language == state.language,
                                "{language.display_name()}"
                            }
                        }
                    }
                    match state.user {
                        Some(user) => rsx! {
                            div { class: "user-info",
                                span { class: "avatar", "{user.avatar}" }
                                span { "{user.name}" }
                                button {
                                    class: "logout-btn",
                                    r#type: "button",
                                    onclick: move |_| store.dispatch(Action::SetUser(None)),
                                    "Log out"
                                }
                            }
                        },
                        None => rsx! {
                            button {
                                class: "login-btn",
                                r#type: "button",
                                onclick: move |_| store.dispatch(Action::SetUser(Some(User::demo_learner()))),
                                "Log in"
                            }
                        },
                    }
                }
            }
        }
    }
}

const MENU: [(&str, &str); 4] = [
    ("🏠", "Home"),
    ("📚", "Fundamentals"),
    ("⚡", "Advanced hooks"),
    ("💼", "Projects"),
];

fn menu_route(index: usize) -> Route {
    match index {
        1 => Route::Fundamentals {},
        2 => Route::AdvancedHooks {},
        3 => Route::Projects {},
        _ => Route::Home {},
    }
}

#[component]
pub fn Sidebar() -> Element {
    let state = use_app_store().state();
    let completed = state.completed_count();
    let percent = state.curriculum_percent();
    // The bar can't grow past full even when duplicates push the figure over 100.
    let bar_width = percent.min(100);

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-content",
                div { class: "progress-section",
                    h3 { "Your progress" }
                    div { class: "progress-bar",
                        div { class: "progress-fill", style: "width: {bar_width}%" }
                    }
                    span { class: "progress-text",
                        "{completed} of {CURRICULUM_LESSON_COUNT} lessons completed"
                    }
                }

                nav { class: "sidebar-nav",
                    for (index, (icon, label)) in MENU.iter().enumerate() {
                        Link {
                            class: "nav-item",
                            active_class: "active",
                            to: menu_route(index),
                            span { class: "nav-icon", "{icon}" }
                            span { class: "nav-label", "{label}" }
                        }
                    }
                }

                div { class: "quick-stats",
                    h4 { "Quick stats" }
                    div { class: "stats-grid",
                        div { class: "stat",
                            span { class: "stat-number", "{completed}" }
                            span { class: "stat-label", "Lessons done" }
                        }
                        div { class: "stat",
                            span { class: "stat-number", "{percent}%" }
                            span { class: "stat-label", "Overall" }
                        }
                    }
                }
            }
        }
    }
}

const DOC_LINKS: [(&str, &str); 3] = [
    ("Rust book", "https://doc.rust-lang.org/book/"),
    ("Dioxus guide", "https://dioxuslabs.com/learn/"),
    ("Tokio tutorial", "https://tokio.rs/tokio/tutorial"),
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-content",
                div { class: "footer-section",
                    h4 { "Mastery Hub" }
                    p { "An interactive tour of UI state management" }
                }
                div { class: "footer-section",
                    h4 { "Useful links" }
                    ul {
                        for (label, href) in DOC_LINKS {
                            li {
                                a { href: "{href}", target: "_blank", rel: "noopener noreferrer", "{label}" }
                            }
                        }
                    }
                }
            }
            div { class: "footer-bottom",
                p { "Made with ❤️ for learners" }
            }
        }
    }
}
