use sbom_uploader::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProjectRepository for testing
///
/// Records every lookup and every created project.
#[derive(Clone, Default)]
pub struct MockProjectRepository {
    pub existing: Vec<String>,
    pub conflict_on_create: bool,
    pub should_fail: bool,
    pub lookups: Arc<Mutex<Vec<String>>>,
    pub created: Arc<Mutex<Vec<Project>>>,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, name: &str) -> Self {
        self.existing.push(name.to_string());
        self
    }

    /// Simulates another process creating the project first
    pub fn with_conflict(mut self) -> Self {
        self.conflict_on_create = true;
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<Project> {
        self.created.lock().unwrap().clone()
    }
}

impl ProjectRepository for MockProjectRepository {
    fn find_by_name(&self, name: &str) -> Result<Option<Project>> {
        self.lookups.lock().unwrap().push(name.to_string());
        if self.should_fail {
            anyhow::bail!("Mock project lookup failure");
        }
        Ok(self
            .existing
            .iter()
            .find(|existing| existing.as_str() == name)
            .map(|existing| Project {
                name: existing.clone(),
                ..Default::default()
            }))
    }

    fn create(&self, project: &Project) -> Result<ProjectCreation> {
        self.created.lock().unwrap().push(project.clone());
        if self.conflict_on_create {
            Ok(ProjectCreation::AlreadyExists)
        } else {
            Ok(ProjectCreation::Created)
        }
    }
}
