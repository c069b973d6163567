//! The application-wide state container.
//!
//! `AppState` is an immutable snapshot; `AppState::reduce` is the only way to
//! get the next one. The UI keeps the current snapshot in a signal and swaps
//! it on every dispatched `Action`.

use crate::model::{Language, LessonId, Theme, User, curriculum_percent};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub user: Option<User>,
    pub theme: Theme,
    pub language: Language,
    /// Insertion ordered; the same lesson may appear more than once.
    pub completed_lessons: Vec<LessonId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetUser(Option<User>),
    ToggleTheme,
    SetLanguage(Language),
    CompleteLesson(LessonId),
}

impl Action {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetUser(_) => "SET_USER",
            Self::ToggleTheme => "TOGGLE_THEME",
            Self::SetLanguage(_) => "SET_LANGUAGE",
            Self::CompleteLesson(_) => "COMPLETE_LESSON",
        }
    }
}

impl AppState {
    /// Initial snapshot with the given startup preferences and nobody signed in.
    #[must_use]
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            user: None,
            theme,
            language,
            completed_lessons: Vec::new(),
        }
    }

    /// Produce the snapshot that follows `action`. Every action succeeds.
    #[must_use]
    pub fn reduce(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::SetUser(user) => next.user = user,
            Action::ToggleTheme => next.theme = self.theme.toggled(),
            Action::SetLanguage(language) => next.language = language,
            Action::CompleteLesson(id) => next.completed_lessons.push(id),
        }
        next
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_lessons.len()
    }

    #[must_use]
    pub fn curriculum_percent(&self) -> u32 {
        curriculum_percent(self.completed_count())
    }
}

/// Fold a sequence of actions over `state`, in order.
#[must_use]
pub fn replay(state: &AppState, actions: impl IntoIterator<Item = Action>) -> AppState {
    actions
        .into_iter()
        .fold(state.clone(), |state, action| state.reduce(action))
}
