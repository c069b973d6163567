use mastery_core::model::{Project, ProjectId, ProjectStats};

/// UI-ready project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardVm {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub progress: i32,
    pub completed: bool,
}

impl ProjectCardVm {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.completed {
            "project-card completed"
        } else {
            "project-card"
        }
    }

    #[must_use]
    pub fn can_decrease(&self) -> bool {
        self.progress > 0
    }

    #[must_use]
    pub fn can_increase(&self) -> bool {
        self.progress < 100
    }
}

impl From<&Project> for ProjectCardVm {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id(),
            title: project.title().to_owned(),
            description: project.description().to_owned(),
            technologies: project.technologies().to_vec(),
            progress: i32::from(project.progress()),
            completed: project.is_completed(),
        }
    }
}

#[must_use]
pub fn map_project_cards(projects: &[&Project]) -> Vec<ProjectCardVm> {
    projects.iter().map(|project| ProjectCardVm::from(*project)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectStatsVm {
    pub total: String,
    pub completed: String,
    pub average: String,
}

impl From<ProjectStats> for ProjectStatsVm {
    fn from(stats: ProjectStats) -> Self {
        Self {
            total: stats.total.to_string(),
            completed: stats.completed.to_string(),
            average: format!("{}%", stats.average_progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use mastery_core::model::{ProjectBoard, ProjectFilter};

    use super::*;

    #[test]
    fn maps_sample_board() {
        let board = ProjectBoard::with_samples();
        let cards = map_project_cards(&board.filtered(ProjectFilter::All));
        assert_eq!(cards.len(), 5);
        assert!(cards[4].completed);
        assert!(!cards[4].can_increase());
        assert!(cards[0].can_decrease());

        let stats = ProjectStatsVm::from(board.stats());
        assert_eq!(stats.average, "62%");
    }
}
