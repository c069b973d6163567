mod lesson_vm;
mod project_vm;
mod sample_vm;
mod time_fmt;

pub use lesson_vm::{LessonCardVm, map_lesson_cards};
pub use project_vm::{ProjectCardVm, ProjectStatsVm, map_project_cards};
pub use sample_vm::{SampleRowVm, format_total, map_sample_rows};
pub use time_fmt::format_timestamp;
