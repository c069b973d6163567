use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use mastery_core::model::fundamentals_lessons;
use mastery_core::store::{Action, AppState};
use mastery_core::time::fixed_clock;
use services::{DemoApi, Latency};

use crate::context::{UiApp, build_app_context};
use crate::components::{Header, LessonList, Sidebar};
use crate::store::{AppStore, use_app_store_provider};
use crate::views::advanced::{EffectLab, WorkshopDemo};
use crate::views::{AdvancedHooksView, FundamentalsView, HomeView, ProjectsView};

#[derive(Clone)]
struct TestApp {
    initial_state: AppState,
    api: Arc<DemoApi>,
}

impl UiApp for TestApp {
    fn initial_state(&self) -> AppState {
        self.initial_state.clone()
    }

    fn demo_api(&self) -> Arc<DemoApi> {
        Arc::clone(&self.api)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Fundamentals,
    AdvancedHooks,
    Projects,
    /// Header, sidebar and the fundamentals lesson list together.
    Shell,
    Workshop,
    EffectLab,
}

/// Lets a test reach the store the harness mounted.
#[derive(Clone, Default)]
pub struct StoreHandle(Rc<RefCell<Option<AppStore>>>);

impl StoreHandle {
    fn store(&self) -> AppStore {
        (*self.0.borrow()).expect("store registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    store: StoreHandle,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let store = use_app_store_provider(move || ctx.initial_state());
    if props.store.0.borrow().is_none() {
        *props.store.0.borrow_mut() = Some(store);
    }
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Fundamentals => rsx! { FundamentalsView {} },
        ViewKind::AdvancedHooks => rsx! { AdvancedHooksView {} },
        ViewKind::Projects => rsx! { ProjectsView {} },
        ViewKind::Shell => rsx! {
            Header {}
            Sidebar {}
            LessonList { title: "Fundamentals lessons", lessons: fundamentals_lessons() }
        },
        ViewKind::Workshop => rsx! { WorkshopDemo {} },
        ViewKind::EffectLab => rsx! { EffectLab {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    store: StoreHandle,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Dispatch through the mounted store, then flush the re-render.
    pub fn dispatch(&mut self, action: Action) {
        let store = self.store.store();
        self.dom.in_runtime(|| store.dispatch(action));
        drive_dom(&mut self.dom);
    }

    pub fn state(&self) -> AppState {
        let store = self.store.store();
        self.dom.in_runtime(|| store.state())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_state(view, AppState::default())
}

pub fn setup_view_harness_with_state(view: ViewKind, initial_state: AppState) -> ViewHarness {
    let api = Arc::new(DemoApi::fixtures(fixed_clock(), Latency::NONE));
    let app = Arc::new(TestApp { initial_state, api });
    let store = StoreHandle::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            store: store.clone(),
        },
    );
    ViewHarness { dom, store }
}
