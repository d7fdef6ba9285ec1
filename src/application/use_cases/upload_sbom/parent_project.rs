use super::UploadSbomUseCase;
use crate::application::dto::ParentProjectStatus;
use crate::ports::outbound::{
    BomRepository, ProgressReporter, ProjectCreation, ProjectRepository, SbomReader,
};
use crate::sbom_upload::domain::Project;
use crate::shared::Result;

impl<SR, PREPO, BREPO, PR> UploadSbomUseCase<SR, PREPO, BREPO, PR>
where
    SR: SbomReader,
    PREPO: ProjectRepository,
    BREPO: BomRepository,
    PR: ProgressReporter,
{
    /// Ensures a project named `parent_name` exists
    ///
    /// A missing parent is created as an application that aggregates its
    /// latest-version children. Exactly one creation request is issued for
    /// a miss and none for a hit.
    pub fn ensure_parent_exists(&self, parent_name: &str) -> Result<ParentProjectStatus> {
        self.progress_reporter
            .report(&format!("🔍 Looking up parent project '{}'", parent_name));

        if let Some(project) = self.project_repository.find_by_name(parent_name)? {
            let message = match project.uuid {
                Some(uuid) => format!("✅ Parent project '{}' exists ({})", project.name, uuid),
                None => format!("✅ Parent project '{}' exists", project.name),
            };
            self.progress_reporter.report(&message);
            return Ok(ParentProjectStatus::Found);
        }

        self.progress_reporter
            .report("Parent project not found... creating a new one");

        let status = match self
            .project_repository
            .create(&Project::aggregate_parent(parent_name))?
        {
            ProjectCreation::Created => {
                self.progress_reporter
                    .report(&format!("✅ Created parent project '{}'", parent_name));
                ParentProjectStatus::Created
            }
            ProjectCreation::AlreadyExists => {
                self.progress_reporter.report(&format!(
                    "✅ Parent project '{}' was created in the meantime",
                    parent_name
                ));
                ParentProjectStatus::AlreadyExisted
            }
        };

        Ok(status)
    }
}
