use crate::model::LessonId;

/// Lessons in the whole curriculum; the denominator of every progress figure.
pub const CURRICULUM_LESSON_COUNT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: LessonId,
    pub title: &'static str,
    pub summary: &'static str,
    pub difficulty: Difficulty,
}

const fn lesson(
    id: u32,
    title: &'static str,
    summary: &'static str,
    difficulty: Difficulty,
) -> Lesson {
    Lesson {
        id: LessonId::new(id),
        title,
        summary,
        difficulty,
    }
}

const FUNDAMENTALS: [Lesson; 6] = [
    lesson(1, "Function components", "Building views out of plain functions", Difficulty::Beginner),
    lesson(2, "Markup macros", "Describing element trees inline", Difficulty::Beginner),
    lesson(3, "State and props", "Data owned by a component versus data passed in", Difficulty::Beginner),
    lesson(4, "Event handling", "Reacting to clicks, input and key presses", Difficulty::Beginner),
    lesson(5, "Signals", "Local state that re-renders on write", Difficulty::Intermediate),
    lesson(6, "Typed components", "Props as structs checked by the compiler", Difficulty::Intermediate),
];

const ADVANCED: [Lesson; 5] = [
    lesson(11, "Effects", "Managing side effects and their cleanup", Difficulty::Intermediate),
    lesson(12, "Memos", "Caching derived values until their inputs change", Difficulty::Advanced),
    lesson(13, "Callbacks", "Stable handlers passed down the tree", Difficulty::Advanced),
    lesson(14, "Element refs", "Reaching the mounted element directly", Difficulty::Advanced),
    lesson(15, "Custom hooks", "Packaging stateful logic for reuse", Difficulty::Advanced),
];

#[must_use]
pub fn fundamentals_lessons() -> &'static [Lesson] {
    &FUNDAMENTALS
}

#[must_use]
pub fn advanced_lessons() -> &'static [Lesson] {
    &ADVANCED
}

/// Share of the curriculum completed, in whole percent.
///
/// Not capped: duplicate completions can push it past 100.
#[must_use]
pub fn curriculum_percent(completed: usize) -> u32 {
    let percent = (completed as f64 / CURRICULUM_LESSON_COUNT as f64) * 100.0;
    percent.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_use_disjoint_ids() {
        let fundamentals: Vec<_> = fundamentals_lessons().iter().map(|l| l.id).collect();
        assert!(advanced_lessons().iter().all(|l| !fundamentals.contains(&l.id)));
        assert_eq!(fundamentals.first(), Some(&LessonId::new(1)));
        assert_eq!(advanced_lessons().last().map(|l| l.id), Some(LessonId::new(15)));
    }

    #[test]
    fn curriculum_percent_rounds() {
        assert_eq!(curriculum_percent(0), 0);
        assert_eq!(curriculum_percent(1), 5);
        assert_eq!(curriculum_percent(20), 100);
        assert_eq!(curriculum_percent(25), 125);
    }
}
