use crate::domain::entities::project::Project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Message(String),
}

impl std::fmt::Display for RepoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RepoError {}

/// Source of the record set the dashboard is seeded with.
pub trait ProjectRepository: Send + Sync {
    fn load_projects(&self) -> Result<Vec<Project>, RepoError>;
}
