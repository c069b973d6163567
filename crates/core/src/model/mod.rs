mod ids;
mod lesson;
mod preferences;
mod project;
mod user;

pub use ids::{LessonId, ProjectId, UserId};

pub use lesson::{
    CURRICULUM_LESSON_COUNT, Difficulty, Lesson, advanced_lessons, curriculum_percent,
    fundamentals_lessons,
};
pub use preferences::{Language, PreferenceParseError, Theme};
pub use project::{
    Project, ProjectBoard, ProjectDraft, ProjectError, ProjectFilter, ProjectStats, clamp_progress,
};
pub use user::{Role, User};
