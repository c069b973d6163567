use dioxus::prelude::*;

#[component]
pub fn TabBar(labels: Vec<&'static str>, active: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "tabs",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    class: tab_class(index == active),
                    r#type: "button",
                    onclick: move |_| on_select.call(index),
                    "{label}"
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab active" } else { "tab" }
}
