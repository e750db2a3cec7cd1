use crate::domain::entities::project::Project;
use crate::infra::seed::csv::parse_projects;
use crate::usecase::ports::repo::{ProjectRepository, RepoError};

pub const SEED_CSV: &str = include_str!("../../../data/projects.csv");

/// Serves the record set compiled into the binary.
pub struct EmbeddedRepo {
    pub csv_text: &'static str,
}

impl Default for EmbeddedRepo {
    fn default() -> Self {
        Self { csv_text: SEED_CSV }
    }
}

impl ProjectRepository for EmbeddedRepo {
    fn load_projects(&self) -> Result<Vec<Project>, RepoError> {
        parse_projects(self.csv_text).map_err(|err| RepoError::Message(format!("{err:#}")))
    }
}
