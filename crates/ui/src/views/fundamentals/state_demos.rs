use dioxus::prelude::*;
use mastery_core::demos::{ItemList, ProfileForm, StepCounter};

use crate::components::{Button, ButtonSize, ButtonVariant, Card};

#[component]
pub(super) fn StateDemos() -> Element {
    rsx! {
        div { class: "state-examples",
            ProfileFormDemo {}
            ItemListDemo {}
            FunctionalUpdateDemo {}
        }
    }
}

#[component]
fn ProfileFormDemo() -> Element {
    let mut form = use_signal(ProfileForm::default);
    let current = form.read().clone();
    let age_value = current.age.to_string();

    rsx! {
        Card { title: "Object state",
            div { class: "form-group",
                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: "{current.name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{current.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                input {
                    r#type: "number",
                    placeholder: "Age",
                    value: "{age_value}",
                    oninput: move |evt| form.write().set_age_input(&evt.value()),
                }
            }
            div { class: "preview",
                p { "Name: {current.name_preview()}" }
                p { "Email: {current.email_preview()}" }
                p { "Age: {current.age_preview()}" }
            }
        }
    }
}

#[component]
fn ItemListDemo() -> Element {
    let mut list = use_signal(ItemList::default);
    let mut draft = use_signal(String::new);
    let items = list.read().items().to_vec();

    let mut submit = move || {
        let text = draft.peek().clone();
        if list.write().add(&text) {
            draft.set(String::new());
        }
    };

    rsx! {
        Card { title: "List state",
            div { class: "input-group",
                input {
                    r#type: "text",
                    placeholder: "New item",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                Button { variant: ButtonVariant::Primary, onclick: move |_| submit(), "Add" }
            }
            if items.is_empty() {
                p { class: "empty-state", "The list is empty" }
            } else {
                ul { class: "item-list",
                    for (index, item) in items.into_iter().enumerate() {
                        li { key: "{index}-{item}",
                            span { "{item}" }
                            Button {
                                variant: ButtonVariant::Danger,
                                size: ButtonSize::Sm,
                                onclick: move |_| list.write().remove_at(index),
                                "🗑️"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Every button updates from the previous value rather than a captured copy.
#[component]
fn FunctionalUpdateDemo() -> Element {
    let mut counter = use_signal(StepCounter::default);
    let value = counter.read().value();

    rsx! {
        Card { title: "Functional updates",
            h3 { "Count: {value}" }
            div { class: "counter-controls",
                Button { variant: ButtonVariant::Success, onclick: move |_| counter.write().increment(), "+1" }
                Button { variant: ButtonVariant::Danger, onclick: move |_| counter.write().decrement(), "-1" }
                Button { variant: ButtonVariant::Secondary, onclick: move |_| counter.write().reset(), "Reset" }
                Button { variant: ButtonVariant::Primary, onclick: move |_| counter.write().increment_by(5), "+5" }
                Button { variant: ButtonVariant::Primary, onclick: move |_| counter.write().increment_by(10), "+10" }
            }
        }
    }
}
