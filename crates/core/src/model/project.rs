use thiserror::Error;

use crate::model::ProjectId;

pub const MIN_PROGRESS: u8 = 0;
pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProjectError {
    #[error("project title cannot be empty")]
    EmptyTitle,
    #[error("project description cannot be empty")]
    EmptyDescription,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    technologies: Vec<String>,
    progress: u8,
    completed: bool,
}

impl Project {
    fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        technologies: &[&str],
        progress: u8,
    ) -> Self {
        let progress = progress.min(MAX_PROGRESS);
        Self {
            id,
            title: title.into(),
            description: description.into(),
            technologies: technologies.iter().map(|t| (*t).to_string()).collect(),
            progress,
            completed: progress == MAX_PROGRESS,
        }
    }

    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_progress(&mut self, requested: i32) {
        self.progress = clamp_progress(requested);
        self.completed = self.progress == MAX_PROGRESS;
    }
}

/// Clamp a requested progress value into `0..=100`.
#[must_use]
pub fn clamp_progress(requested: i32) -> u8 {
    // The clamp keeps the value inside u8 range, so the cast is lossless.
    requested.clamp(i32::from(MIN_PROGRESS), i32::from(MAX_PROGRESS)) as u8
}

/// Raw text from the add-project form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Comma separated technology tags.
    pub technologies: String,
}

struct ValidatedDraft {
    title: String,
    description: String,
    technologies: Vec<String>,
}

impl ProjectDraft {
    fn validate(&self) -> Result<ValidatedDraft, ProjectError> {
        if self.title.trim().is_empty() {
            return Err(ProjectError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ProjectError::EmptyDescription);
        }
        let technologies = self
            .technologies
            .split(',')
            .map(str::trim)
            .filter(|tech| !tech.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(ValidatedDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            technologies,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    InProgress,
    Completed,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [Self::All, Self::InProgress, Self::Completed];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All projects",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::InProgress => !project.is_completed(),
            Self::Completed => project.is_completed(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    /// Mean progress rounded to the nearest whole percent; 0 for an empty board.
    pub average_progress: u32,
}

/// The in-memory list behind the projects page. Newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectBoard {
    projects: Vec<Project>,
}

impl ProjectBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The five practice projects every fresh board starts with.
    #[must_use]
    pub fn with_samples() -> Self {
        let projects = vec![
            Project::new(
                ProjectId::new(1),
                "Advanced todo app",
                "Task manager with filters, tags and local drafts",
                &["Rust", "Dioxus", "Signals", "CSS"],
                85,
            ),
            Project::new(
                ProjectId::new(2),
                "Weather dashboard",
                "Weather dashboard with interactive charts",
                &["Rust", "API integration", "Charts", "Tailwind"],
                60,
            ),
            Project::new(
                ProjectId::new(3),
                "E-commerce store",
                "Online store with a cart and a checkout flow",
                &["Rust", "Context", "Axum", "SQLite"],
                40,
            ),
            Project::new(
                ProjectId::new(4),
                "Social media app",
                "Social network with chat and sharing",
                &["Rust", "WebSockets", "PWA", "Tokio"],
                25,
            ),
            Project::new(
                ProjectId::new(5),
                "Portfolio website",
                "Personal site with rich animations",
                &["Rust", "Animations", "WebGL", "SVG"],
                100,
            ),
        ];
        Self { projects }
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Validate the draft and insert the new project at the head of the board.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::EmptyTitle` or `ProjectError::EmptyDescription`
    /// when the corresponding field is blank; the board is left untouched.
    pub fn add(&mut self, draft: &ProjectDraft) -> Result<ProjectId, ProjectError> {
        let validated = draft.validate()?;
        let id = self.next_id();
        self.projects.insert(
            0,
            Project {
                id,
                title: validated.title,
                description: validated.description,
                technologies: validated.technologies,
                progress: MIN_PROGRESS,
                completed: false,
            },
        );
        Ok(id)
    }

    /// Set a project's progress, clamped to `0..=100`. Unknown ids are ignored.
    pub fn update_progress(&mut self, id: ProjectId, requested: i32) {
        if let Some(project) = self.projects.iter_mut().find(|project| project.id == id) {
            project.set_progress(requested);
        }
    }

    /// Returns true if a project was removed.
    pub fn remove(&mut self, id: ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|project| project.id != id);
        self.projects.len() != before
    }

    #[must_use]
    pub fn filtered(&self, filter: ProjectFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| filter.matches(project))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> ProjectStats {
        let total = self.projects.len();
        let completed = self.projects.iter().filter(|p| p.completed).count();
        let average_progress = if total == 0 {
            0
        } else {
            let sum: u32 = self.projects.iter().map(|p| u32::from(p.progress)).sum();
            (f64::from(sum) / total as f64).round() as u32
        };
        ProjectStats {
            total,
            completed,
            average_progress,
        }
    }

    fn next_id(&self) -> ProjectId {
        let max = self
            .projects
            .iter()
            .map(|project| project.id.value())
            .max()
            .unwrap_or(0);
        ProjectId::new(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str, technologies: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: description.to_string(),
            technologies: technologies.to_string(),
        }
    }

    #[test]
    fn progress_updates_are_clamped() {
        let mut board = ProjectBoard::with_samples();
        let id = ProjectId::new(2);

        board.update_progress(id, -20);
        assert_eq!(board.get(id).unwrap().progress(), 0);
        assert!(!board.get(id).unwrap().is_completed());

        board.update_progress(id, 150);
        assert_eq!(board.get(id).unwrap().progress(), 100);
        assert!(board.get(id).unwrap().is_completed());

        board.update_progress(id, 90);
        assert!(!board.get(id).unwrap().is_completed());
    }

    #[test]
    fn unknown_project_updates_are_ignored() {
        let mut board = ProjectBoard::with_samples();
        let before = board.clone();
        board.update_progress(ProjectId::new(99), 50);
        assert_eq!(board, before);
        assert!(!board.remove(ProjectId::new(99)));
    }

    #[test]
    fn add_rejects_blank_title() {
        let mut board = ProjectBoard::with_samples();
        let err = board.add(&draft("   ", "desc", "")).unwrap_err();
        assert_eq!(err, ProjectError::EmptyTitle);
        assert_eq!(board.len(), 5);
    }

    #[test]
    fn add_rejects_blank_description() {
        let mut board = ProjectBoard::new();
        let err = board.add(&draft("Title", "", "")).unwrap_err();
        assert_eq!(err, ProjectError::EmptyDescription);
        assert!(board.is_empty());
    }

    #[test]
    fn add_inserts_exactly_one_project_at_head() {
        let mut board = ProjectBoard::with_samples();
        let id = board
            .add(&draft("Chat", "Realtime chat", " Rust, Tokio ,, "))
            .unwrap();

        assert_eq!(board.len(), 6);
        let head = &board.projects()[0];
        assert_eq!(head.id(), id);
        assert_eq!(head.title(), "Chat");
        assert_eq!(head.progress(), 0);
        assert!(!head.is_completed());
        assert_eq!(head.technologies(), ["Rust".to_string(), "Tokio".to_string()]);
        assert_eq!(id, ProjectId::new(6));
    }

    #[test]
    fn remove_drops_matching_project() {
        let mut board = ProjectBoard::with_samples();
        assert!(board.remove(ProjectId::new(3)));
        assert_eq!(board.len(), 4);
        assert!(board.get(ProjectId::new(3)).is_none());
    }

    #[test]
    fn stats_and_filters_follow_completion() {
        let board = ProjectBoard::with_samples();
        let stats = board.stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 1);
        // (85 + 60 + 40 + 25 + 100) / 5 = 62
        assert_eq!(stats.average_progress, 62);

        assert_eq!(board.filtered(ProjectFilter::All).len(), 5);
        assert_eq!(board.filtered(ProjectFilter::InProgress).len(), 4);
        assert_eq!(board.filtered(ProjectFilter::Completed).len(), 1);
        assert_eq!(ProjectBoard::new().stats().average_progress, 0);
    }
}
