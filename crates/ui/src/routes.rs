use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::components::{Footer, Header, Sidebar};
use crate::store::use_app_store;
use crate::views::{AdvancedHooksView, FundamentalsView, HomeView, ProjectsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/fundamentals", FundamentalsView)] Fundamentals {},
        #[route("/advanced-hooks", AdvancedHooksView)] AdvancedHooks {},
        #[route("/projects", ProjectsView)] Projects {},
}

#[component]
fn Layout() -> Element {
    let state = use_app_store().state();
    let theme = state.theme;
    let dir = state.language.dir();

    rsx! {
        div { class: "app theme-{theme}", dir: "{dir}", lang: "{state.language}",
            Header {}
            div { class: "main-container",
                Sidebar {}
                main { class: "main-content",
                    Outlet::<Route> {}
                }
            }
            Footer {}
        }
    }
}
