//! Context demo: one `WorkshopState` provided at the top and read or mutated
//! by components at any depth below it.

use dioxus::prelude::*;
use mastery_core::model::{Language, Role};
use mastery_core::workshop::{Member, QUICK_CART_ITEMS, SettingsPatch, WorkshopState};

use crate::components::{Button, ButtonSize, ButtonVariant, Card, TabBar};

#[derive(Clone, Copy, PartialEq)]
struct Workshop(Signal<WorkshopState>);

fn use_workshop() -> Signal<WorkshopState> {
    use_context::<Workshop>().0
}

const SECTIONS: [&str; 4] = ["👤 Member", "⚙️ Settings", "🛒 Cart", "🪆 Nested"];

#[component]
pub(crate) fn WorkshopDemo() -> Element {
    use_context_provider(|| Workshop(Signal::new(WorkshopState::new())));
    let mut section = use_signal(|| 0_usize);

    rsx! {
        div { class: "workshop",
            TabBar {
                labels: SECTIONS.to_vec(),
                active: section(),
                on_select: move |index: usize| section.set(index),
            }
            match section() {
                0 => rsx! { MemberPanel {} },
                1 => rsx! { SettingsPanel {} },
                2 => rsx! { CartPanel {} },
                _ => rsx! { Level1 {} },
            }
        }
    }
}

fn role_badge(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge admin",
        Role::User => "badge",
    }
}

#[component]
fn MemberPanel() -> Element {
    let mut workshop = use_workshop();
    let member = workshop.read().member().cloned();

    rsx! {
        Card { title: "Member",
            match member {
                Some(member) => rsx! {
                    div { class: "member-info",
                        p { "Name: {member.name}" }
                        p { "Email: {member.email}" }
                        span { class: role_badge(member.role), "{member.role.as_str()}" }
                    }
                    Button { variant: ButtonVariant::Danger, onclick: move |_| workshop.write().logout(), "Log out" }
                },
                None => rsx! {
                    p { "Nobody is signed in." }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| workshop.write().login(Member::admin()),
                        "Log in"
                    }
                },
            }
        }
    }
}

#[component]
fn SettingsPanel() -> Element {
    let mut workshop = use_workshop();
    let settings = workshop.read().settings();
    let json = settings.to_pretty_json();

    rsx! {
        Card { title: "Settings",
            div { class: "settings-row",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        let theme = workshop.peek().settings().theme.toggled();
                        workshop.write().update_settings(SettingsPatch { theme: Some(theme), ..SettingsPatch::default() });
                    },
                    "{settings.theme.toggle_icon()} Toggle theme"
                }
                select {
                    value: "{settings.language}",
                    onchange: move |evt| {
                        if let Ok(language) = evt.value().parse::<Language>() {
                            workshop.write().update_settings(SettingsPatch { language: Some(language), ..SettingsPatch::default() });
                        }
                    },
                    option { value: "fa", "{Language::Fa.display_name()}" }
                    option { value: "en", "{Language::En.display_name()}" }
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: settings.notifications,
                        onchange: move |evt| {
                            workshop.write().update_settings(SettingsPatch { notifications: Some(evt.checked()), ..SettingsPatch::default() });
                        },
                    }
                    " Notifications"
                }
            }
            h4 { "Current settings" }
            pre { class: "settings-json", "{json}" }
        }
    }
}

#[component]
fn CartPanel() -> Element {
    let mut workshop = use_workshop();
    let mut draft = use_signal(String::new);
    let cart = workshop.read().cart().to_vec();

    let mut add_draft = move || {
        let text = draft.peek().trim().to_string();
        if text.is_empty() {
            return;
        }
        workshop.write().add_to_cart(text);
        draft.set(String::new());
    };

    rsx! {
        Card { title: "Cart ({cart.len()})",
            div { class: "input-group",
                input {
                    r#type: "text",
                    placeholder: "Item name",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                Button { variant: ButtonVariant::Primary, onclick: move |_| add_draft(), "Add" }
            }
            div { class: "quick-items",
                for item in QUICK_CART_ITEMS {
                    Button {
                        key: "{item}",
                        size: ButtonSize::Sm,
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| workshop.write().add_to_cart(item),
                        "+ {item}"
                    }
                }
            }
            if cart.is_empty() {
                p { class: "empty-state", "The cart is empty" }
            } else {
                ul { class: "cart-list",
                    for (index, item) in cart.into_iter().enumerate() {
                        li { key: "{index}-{item}",
                            span { "{item}" }
                            Button {
                                size: ButtonSize::Sm,
                                variant: ButtonVariant::Danger,
                                onclick: move |_| {
                                    workshop.write().remove_from_cart(&item);
                                },
                                "Remove"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Level1() -> Element {
    rsx! {
        div { class: "nested level-1",
            h4 { "Level 1" }
            Level2 {}
        }
    }
}

#[component]
fn Level2() -> Element {
    let workshop = use_workshop();
    let theme = workshop.read().settings().theme;

    rsx! {
        div { class: "nested level-2",
            h4 { "Level 2" }
            p { "Theme from context: {theme}" }
            Level3 {}
        }
    }
}

#[component]
fn Level3() -> Element {
    let mut workshop = use_workshop();
    let member = workshop.read().member().map(|member| member.name.clone());
    let cart_len = workshop.read().cart().len();

    rsx! {
        div { class: "nested level-3",
            h4 { "Level 3" }
            match member {
                Some(name) => rsx! { p { "Signed in as {name}" } },
                None => rsx! { p { "Not signed in" } },
            }
            p { "Items in cart: {cart_len}" }
            div { class: "counter-controls",
                Button {
                    size: ButtonSize::Sm,
                    onclick: move |_| workshop.write().login(Member::tester()),
                    "Log in as tester"
                }
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| workshop.write().add_to_cart("Item from level 3"),
                    "Add to cart"
                }
            }
        }
    }
}
