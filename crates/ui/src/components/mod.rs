mod card;
mod counter;
mod layout;
mod lessons;
mod tabs;

pub use card::{Button, ButtonSize, ButtonVariant, Card};
pub use counter::StepCounterCard;
pub use layout::{Footer, Header, Sidebar};
pub use lessons::LessonList;
pub use tabs::TabBar;
