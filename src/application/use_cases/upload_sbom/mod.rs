use crate::application::dto::{UploadRequest, UploadResponse};
use crate::ports::outbound::{
    BomReceipt, BomRepository, ProgressReporter, ProjectRepository, SbomReader,
};
use crate::sbom_upload::domain::{SbomDocument, SbomSource, UploadForm};
use crate::shared::error::UploadError;
use crate::shared::Result;

mod parent_project;


/// UploadSbomUseCase - runs one upload from a validated request
///
/// Sequence: read SBOM → ensure parent (only when one is configured) →
/// upload. The first failure ends the run; nothing is rolled back, so a
/// parent created before a failed upload stays in place.
///
/// The SBOM is read before any network call so that bad input never
/// touches the server.
///
/// # Type Parameters
/// * `SR` - SbomReader implementation
/// * `PREPO` - ProjectRepository implementation
/// * `BREPO` - BomRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct UploadSbomUseCase<SR, PREPO, BREPO, PR> {
    sbom_reader: SR,
    project_repository: PREPO,
    bom_repository: BREPO,
    progress_reporter: PR,
}

impl<SR, PREPO, BREPO, PR> UploadSbomUseCase<SR, PREPO, BREPO, PR>
where
    SR: SbomReader,
    PREPO: ProjectRepository,
    BREPO: BomRepository,
    PR: ProgressReporter,
{
    /// Creates a new UploadSbomUseCase with injected dependencies
    pub fn new(
        sbom_reader: SR,
        project_repository: PREPO,
        bom_repository: BREPO,
        progress_reporter: PR,
    ) -> Self {
        Self {
            sbom_reader,
            project_repository,
            bom_repository,
            progress_reporter,
        }
    }

    /// Executes the upload workflow
    pub fn execute(&self, request: &UploadRequest) -> Result<UploadResponse> {
        // Step 1: Read the SBOM payload
        let document = self.read_sbom(&request.sbom_source)?;
        let sbom_size = document.len();

        // Step 2: Make sure the parent project exists
        let parent = match request.parent_name.as_deref() {
            Some(parent_name) => Some(self.ensure_parent_exists(parent_name)?),
            None => None,
        };

        // Step 3: Submit the SBOM
        let receipt = self.upload_sbom(request, document)?;

        Ok(UploadResponse::new(sbom_size, parent, receipt))
    }

    fn read_sbom(&self, source: &SbomSource) -> Result<SbomDocument> {
        self.progress_reporter
            .report(&format!("📖 Reading SBOM from: {}", source));

        let document = self.sbom_reader.read_sbom(source)?;

        // An empty file is taken as given; only an empty stdin means "nothing was provided"
        if document.is_empty() && *source == SbomSource::Stdin {
            return Err(UploadError::EmptyStdin.into());
        }

        self.progress_reporter
            .report(&format!("✅ Read {} byte(s)", document.len()));
        Ok(document)
    }

    fn upload_sbom(&self, request: &UploadRequest, document: SbomDocument) -> Result<BomReceipt> {
        let form = UploadForm::new(
            &request.project_name,
            &request.project_version,
            document.into_content(),
        )
        .with_parent(request.parent_name.as_deref())
        .with_latest(request.mark_as_latest)
        .with_tags(request.tags.as_deref());

        self.progress_reporter.report_waiting(&format!(
            "📤 Uploading SBOM for {} {} to {}",
            request.project_name, request.project_version, request.server_url
        ));

        let receipt = match self.bom_repository.upload(&form) {
            Ok(receipt) => receipt,
            Err(e) => {
                self.progress_reporter
                    .report_error("⚠️  Dependency-Track did not accept the SBOM");
                return Err(e);
            }
        };

        let completion = match receipt.token {
            Some(token) => format!(
                "📦 SBOM accepted ({}), processing token: {}",
                receipt.status, token
            ),
            None => format!("📦 SBOM accepted ({})", receipt.status),
        };
        self.progress_reporter.report_completion(&completion);

        Ok(receipt)
    }
}
