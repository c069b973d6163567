use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::use_app_store_provider;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_app_store_provider(move || ctx.initial_state());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Mastery Hub" }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                div { class: "fatal",
                    h1 { "Something went wrong" }
                    pre { "{errors:?}" }
                }
            },
            Router::<Route> {}
        }
    }
}
