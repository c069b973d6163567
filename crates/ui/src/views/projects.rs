use dioxus::prelude::*;
use mastery_core::model::{ProjectBoard, ProjectDraft, ProjectError, ProjectFilter, ProjectId};

use crate::components::{Button, ButtonSize, ButtonVariant, Card};
use crate::vm::{ProjectCardVm, ProjectStatsVm, map_project_cards};

const PROGRESS_STEP: i32 = 10;

fn project_error_message(err: ProjectError) -> &'static str {
    match err {
        ProjectError::EmptyTitle => "Please enter a project title",
        ProjectError::EmptyDescription => "Please enter a project description",
        _ => "The project could not be added",
    }
}

fn filter_class(active: bool) -> &'static str {
    if active { "filter-btn active" } else { "filter-btn" }
}

#[component]
pub fn ProjectsView() -> Element {
    let board = use_signal(ProjectBoard::with_samples);
    let mut filter = use_signal(|| ProjectFilter::All);

    let stats = ProjectStatsVm::from(board.read().stats());
    let cards = map_project_cards(&board.read().filtered(filter()));

    rsx! {
        div { class: "page projects-page",
            h1 { "💼 Practice projects" }

            div { class: "project-stats",
                div { class: "stat-card",
                    h4 { "Total projects" }
                    span { class: "stat-number", "{stats.total}" }
                }
                div { class: "stat-card",
                    h4 { "Completed" }
                    span { class: "stat-number", "{stats.completed}" }
                }
                div { class: "stat-card",
                    h4 { "Average progress" }
                    span { class: "stat-number", "{stats.average}" }
                }
            }

            AddProjectForm { board }

            div { class: "project-filters",
                for option in ProjectFilter::ALL {
                    button {
                        key: "{option.label()}",
                        class: filter_class(option == filter()),
                        r#type: "button",
                        onclick: move |_| filter.set(option),
                        "{option.label()}"
                    }
                }
            }

            if cards.is_empty() {
                p { class: "empty-state", "No projects match this filter" }
            } else {
                div { class: "projects-grid",
                    for card in cards {
                        ProjectCard { key: "{card.id}", card, board }
                    }
                }
            }

            Card { title: "🗺️ Learning path",
                ol { class: "learning-path",
                    li { "Start with the small projects to practise components and props" }
                    li { "Move on to state and effects with the data-driven ones" }
                    li { "Finish with the large apps that combine context and custom hooks" }
                }
            }
        }
    }
}

#[component]
fn AddProjectForm(board: Signal<ProjectBoard>) -> Element {
    let mut draft = use_signal(ProjectDraft::default);
    let mut error = use_signal(|| None::<ProjectError>);
    let current = draft.read().clone();

    rsx! {
        Card { title: "➕ New project",
            div { class: "project-form",
                input {
                    r#type: "text",
                    placeholder: "Project title",
                    value: "{current.title}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }
                textarea {
                    placeholder: "Description",
                    value: "{current.description}",
                    oninput: move |evt| draft.write().description = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Technologies (comma separated)",
                    value: "{current.technologies}",
                    oninput: move |evt| draft.write().technologies = evt.value(),
                }
                if let Some(err) = error() {
                    p { class: "form-error", "{project_error_message(err)}" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        let submitted = draft.peek().clone();
                        match board.write().add(&submitted) {
                            Ok(id) => {
                                tracing::debug!(%id, "project added");
                                draft.set(ProjectDraft::default());
                                error.set(None);
                            }
                            Err(err) => error.set(Some(err)),
                        }
                    },
                    "Add project"
                }
            }
        }
    }
}

#[component]
fn ProjectCard(card: ProjectCardVm, board: Signal<ProjectBoard>) -> Element {
    let mut expanded = use_signal(|| false);
    let id: ProjectId = card.id;
    let progress = card.progress;
    let mut set_progress = move |value: i32| board.write().update_progress(id, value);

    rsx! {
        div { class: "{card.css_class()}",
            div { class: "project-header",
                h3 { "{card.title}" }
                if card.completed {
                    span { class: "badge success", "✅ Done" }
                }
            }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {progress}%" }
            }
            p { class: "progress-text", "{progress}%" }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                value: "{progress}",
                oninput: move |evt| {
                    if let Ok(value) = evt.value().parse::<i32>() {
                        set_progress(value);
                    }
                },
            }
            div { class: "project-actions",
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Secondary,
                    disabled: !card.can_decrease(),
                    onclick: move |_| set_progress(progress - PROGRESS_STEP),
                    "-10%"
                }
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Secondary,
                    disabled: !card.can_increase(),
                    onclick: move |_| set_progress(progress + PROGRESS_STEP),
                    "+10%"
                }
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Success,
                    disabled: card.completed,
                    onclick: move |_| set_progress(100),
                    "Complete"
                }
                Button {
                    size: ButtonSize::Sm,
                    onclick: move |_| expanded.toggle(),
                    if expanded() { "Hide details" } else { "Details" }
                }
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Danger,
                    onclick: move |_| {
                        board.write().remove(id);
                    },
                    "🗑️ Delete"
                }
            }
            if expanded() {
                div { class: "project-details",
                    p { "{card.description}" }
                    div { class: "tech-tags",
                        for tech in card.technologies.iter() {
                            span { key: "{tech}", class: "tech-tag", "{tech}" }
                        }
                    }
                }
            }
        }
    }
}
