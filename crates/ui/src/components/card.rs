use dioxus::prelude::*;

#[component]
pub fn Card(
    title: Option<String>,
    subtitle: Option<String>,
    children: Element,
) -> Element {
    let has_header = title.is_some() || subtitle.is_some();

    rsx! {
        div { class: "card card-shadow card-border",
            if has_header {
                div { class: "card-header",
                    if let Some(title) = title {
                        h3 { class: "card-title", "{title}" }
                    }
                    if let Some(subtitle) = subtitle {
                        p { class: "card-subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Success => "btn-success",
            Self::Danger => "btn-danger",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size_class = match size {
        ButtonSize::Sm => "btn-sm",
        ButtonSize::Md => "btn-md",
    };
    let state_class = if disabled || loading { "btn-disabled" } else { "" };

    rsx! {
        button {
            class: "btn {variant.class()} {size_class} {state_class}",
            r#type: "button",
            disabled: disabled || loading,
            onclick: move |evt| onclick.call(evt),
            if loading {
                span { class: "btn-spinner", "⏳" }
            }
            {children}
        }
    }
}
