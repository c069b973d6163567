use dioxus::prelude::*;
use mastery_core::model::{LessonId, User};
use mastery_core::store::{Action, AppState};

use super::test_harness::{
    ViewKind, drive_dom, setup_view_harness, setup_view_harness_with_state,
};
use crate::components::Button;
use crate::store::{StoreError, try_app_store};

#[test]
fn home_view_prompts_guest_to_log_in() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to Mastery Hub"), "missing hero in {html}");
    assert!(html.contains("Log in and start"), "missing prompt in {html}");
    assert!(html.contains("0%"), "missing level in {html}");
}

#[test]
fn home_view_greets_signed_in_learner() {
    let state = AppState::default()
        .reduce(Action::SetUser(Some(User::demo_learner())))
        .reduce(Action::CompleteLesson(LessonId::new(1)))
        .reduce(Action::CompleteLesson(LessonId::new(2)));
    let mut harness = setup_view_harness_with_state(ViewKind::Home, state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("یادگیرنده React"), "missing name in {html}");
    assert!(html.contains("2 lessons"), "missing completed count in {html}");
    assert!(html.contains("10%"), "missing curriculum percent in {html}");
}

#[test]
fn fundamentals_view_renders_independent_counters() {
    let mut harness = setup_view_harness(ViewKind::Fundamentals);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Count: 0"), "missing first counter in {html}");
    assert!(html.contains("Count: 10"), "missing second counter in {html}");
    assert!(html.contains("Count: -5"), "missing third counter in {html}");
    assert_eq!(html.matches("Step: 1").count(), 3, "counters should all step by one: {html}");
}

#[test]
fn projects_view_renders_sample_board() {
    let mut harness = setup_view_harness(ViewKind::Projects);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("62%"), "missing average progress in {html}");
    assert!(html.contains("Average progress"), "missing stats in {html}");
    assert!(html.contains("Weather dashboard"), "missing sample project in {html}");
    assert!(html.contains("Learning path"), "missing guide in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn advanced_view_loads_samples_on_mount() {
    let mut harness = setup_view_harness(ViewKind::AdvancedHooks);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Advanced hooks"), "missing title in {html}");
    assert!(html.contains("Item 1:"), "missing sample rows in {html}");
}

#[component]
fn StoreProbe() -> Element {
    match try_app_store() {
        Ok(_) => rsx! { p { "store found" } },
        Err(StoreError::MissingProvider) => rsx! { p { "no store" } },
    }
}

#[test]
fn store_lookup_without_provider_reports_missing() {
    let mut dom = VirtualDom::new(StoreProbe);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("no store"), "unexpected {html}");
}

#[test]
fn completing_a_lesson_rerenders_the_sidebar() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("0 of 20 lessons completed"), "unexpected {html}");

    harness.dispatch(Action::CompleteLesson(LessonId::new(1)));
    let html = harness.render();
    assert!(html.contains("1 of 20 lessons completed"), "sidebar not updated in {html}");
    assert!(html.contains("completed 1×"), "lesson card not updated in {html}");
    assert_eq!(harness.state().completed_lessons, vec![LessonId::new(1)]);
}

#[test]
fn header_follows_log_in_log_out_and_theme() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    assert!(harness.render().contains("🌙"));

    harness.dispatch(Action::SetUser(Some(User::demo_learner())));
    let html = harness.render();
    assert!(html.contains("یادگیرنده React"), "missing user in {html}");
    assert!(html.contains("Log out"), "missing log out in {html}");

    harness.dispatch(Action::ToggleTheme);
    assert!(harness.render().contains("☀️"));

    harness.dispatch(Action::SetUser(None));
    let html = harness.render();
    assert!(!html.contains("Log out"), "still signed in: {html}");
    assert!(harness.state().user.is_none());
}

#[test]
fn workshop_starts_signed_out() {
    let mut harness = setup_view_harness(ViewKind::Workshop);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Member"), "missing section tabs in {html}");
    assert!(html.contains("Nobody is signed in."), "unexpected member in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn effect_lab_lists_directory_users() {
    let mut harness = setup_view_harness(ViewKind::EffectLab);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Ali Mohammadi"), "missing users in {html}");
    assert!(html.contains("Sara Ahmadi"), "missing users in {html}");
    assert!(html.contains("0 s"), "missing timer in {html}");
}

#[component]
fn PendingButton() -> Element {
    rsx! {
        Button { loading: true, onclick: move |_| {}, "Refetch" }
    }
}

#[test]
fn loading_button_is_disabled_with_spinner() {
    let mut dom = VirtualDom::new(PendingButton);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("btn-spinner"), "missing spinner in {html}");
    assert!(html.contains("btn-disabled"), "missing disabled class in {html}");
}
