use dioxus::prelude::*;
use mastery_core::model::Lesson;
use mastery_core::store::Action;

use crate::store::use_app_store;
use crate::vm::map_lesson_cards;

#[component]
pub fn LessonList(title: String, lessons: &'static [Lesson]) -> Element {
    let store = use_app_store();
    let cards = map_lesson_cards(lessons, &store.state());

    rsx! {
        div { class: "lessons-list",
            h2 { "{title}" }
            for card in cards {
                div { key: "{card.id}", class: "{card.css_class()}",
                    h3 { "{card.title}" }
                    p { "{card.summary}" }
                    small { class: "lesson-meta", "{card.difficulty} · completed {card.times_completed}×" }
                    button {
                        class: "complete-btn",
                        r#type: "button",
                        onclick: move |_| store.dispatch(Action::CompleteLesson(card.id)),
                        "✅ Complete lesson"
                    }
                }
            }
        }
    }
}
