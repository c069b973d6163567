#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum WindowEvent {
    Resize,
    KeyDown,
}

impl WindowEvent {
    const fn dom_name(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::KeyDown => "keydown",
        }
    }

    /// JS expression producing the value sent back to Rust.
    const fn payload(self) -> &'static str {
        match self {
            Self::Resize => "{ width: window.innerWidth, height: window.innerHeight }",
            Self::KeyDown => "event.key",
        }
    }
}

fn handler_key(slot: &str, event: WindowEvent) -> String {
    format!("__mastery_{slot}_{}", event.dom_name())
}

/// Install a window listener that forwards each event over the eval channel.
///
/// Any listener left over in the same slot is removed first. Resize also
/// reports the current size immediately.
pub(super) fn attach_listener_script(slot: &str, event: WindowEvent) -> String {
    let key = handler_key(slot, event);
    let name = event.dom_name();
    let payload = event.payload();
    let report_now = if event == WindowEvent::Resize {
        "handler(null);"
    } else {
        ""
    };
    format!(
        r#"(function() {{
            const previous = window[{key:?}];
            if (previous) {{
                window.removeEventListener({name:?}, previous);
            }}
            const handler = (event) => dioxus.send({payload});
            window[{key:?}] = handler;
            window.addEventListener({name:?}, handler);
            {report_now}
        }})();"#
    )
}

pub(super) fn detach_listener_script(slot: &str, event: WindowEvent) -> String {
    let key = handler_key(slot, event);
    let name = event.dom_name();
    format!(
        r#"(function() {{
            const handler = window[{key:?}];
            if (handler) {{
                window.removeEventListener({name:?}, handler);
                delete window[{key:?}];
            }}
        }})();"#
    )
}
