use mastery_core::model::{Lesson, LessonId};
use mastery_core::store::AppState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: &'static str,
    pub summary: &'static str,
    pub difficulty: &'static str,
    /// How many times the learner pressed "complete"; duplicates count.
    pub times_completed: usize,
}

impl LessonCardVm {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.times_completed > 0 {
            "lesson-card done"
        } else {
            "lesson-card"
        }
    }
}

#[must_use]
pub fn map_lesson_cards(lessons: &[Lesson], state: &AppState) -> Vec<LessonCardVm> {
    lessons
        .iter()
        .map(|lesson| LessonCardVm {
            id: lesson.id,
            title: lesson.title,
            summary: lesson.summary,
            difficulty: lesson.difficulty.label(),
            times_completed: state
                .completed_lessons
                .iter()
                .filter(|id| **id == lesson.id)
                .count(),
        })
        .collect()
}
