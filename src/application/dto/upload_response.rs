use crate::ports::outbound::BomReceipt;

/// What happened to the parent project during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentProjectStatus {
    /// The lookup found it
    Found,
    /// It was absent and has been created
    Created,
    /// It was absent at lookup time but the server reported it as existing on creation
    AlreadyExisted,
}

/// UploadResponse - outcome of a successful upload run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    /// Number of SBOM bytes submitted
    pub sbom_size: usize,
    /// None when no parent project was configured
    pub parent: Option<ParentProjectStatus>,
    pub receipt: BomReceipt,
}

impl UploadResponse {
    pub fn new(sbom_size: usize, parent: Option<ParentProjectStatus>, receipt: BomReceipt) -> Self {
        Self {
            sbom_size,
            parent,
            receipt,
        }
    }
}
