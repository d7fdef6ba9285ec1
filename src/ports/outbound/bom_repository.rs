use crate::sbom_upload::domain::UploadForm;
use crate::shared::Result;
use uuid::Uuid;

/// Acknowledgement returned by the BOM endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomReceipt {
    /// HTTP status of the accepted upload (200 or 202)
    pub status: u16,
    /// Token identifying the asynchronous processing task, when the server sent one
    pub token: Option<Uuid>,
}

/// BomRepository port for submitting SBOMs
pub trait BomRepository {
    /// Submits the form to the BOM endpoint
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request cannot be delivered after all retries
    /// - The server answers with anything other than 200 or 202; the error
    ///   carries the status code and the response body
    fn upload(&self, form: &UploadForm) -> Result<BomReceipt>;
}
