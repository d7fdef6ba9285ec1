use crate::sbom_upload::domain::Project;
use crate::shared::Result;

/// Result of a project creation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCreation {
    Created,
    /// The server already knows a project with that name
    AlreadyExists,
}

/// ProjectRepository port for the project endpoints of Dependency-Track
pub trait ProjectRepository {
    /// Looks up a project by name
    ///
    /// # Returns
    /// `None` when the server has no project with that name
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request cannot be delivered after all retries
    /// - The server answers with an unexpected status code
    /// - A successful response body cannot be decoded
    fn find_by_name(&self, name: &str) -> Result<Option<Project>>;

    /// Creates a project from the given record
    ///
    /// # Errors
    /// Returns an error if the request fails or the server rejects it
    fn create(&self, project: &Project) -> Result<ProjectCreation>;
}
