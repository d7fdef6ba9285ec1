//! sbom-uploader - upload SBOM documents to Dependency-Track
//!
//! This library reads an SBOM (from a file or standard input), optionally
//! makes sure an aggregating parent project exists, and submits the SBOM to
//! the Dependency-Track BOM endpoint with a retry policy that tolerates
//! transient failures and not-yet-visible projects.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_upload`): Project wire record, SBOM payload, upload form, retry policy
//! - **Application Layer** (`application`): The upload use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_uploader::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let settings = UploadSettings {
//!     url: Some("https://dt.example.com".to_string()),
//!     api_key: Some("odt_secret".to_string()),
//!     name: Some("app".to_string()),
//!     version: Some("1.0.0".to_string()),
//!     parent: Some("group".to_string()),
//!     sbom: Some("bom.json".into()),
//!     ..Default::default()
//! };
//! let request = UploadRequest::from_settings(&settings)?;
//!
//! let http = RetryingHttpClient::new(settings.retry_policy(), settings.request_timeout()?)?;
//! let client = DependencyTrackClient::new(http, &request.server_url, &request.api_key);
//!
//! let use_case = UploadSbomUseCase::new(
//!     FileSystemSbomReader::new(),
//!     client.clone(),
//!     client,
//!     StderrProgressReporter::new(),
//! );
//! let response = use_case.execute(&request)?;
//! println!("accepted with status {}", response.receipt.status);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_upload;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemSbomReader;
    pub use crate::adapters::outbound::network::{DependencyTrackClient, RetryingHttpClient};
    pub use crate::application::dto::{
        ParentProjectStatus, UploadRequest, UploadResponse, UploadSettings,
    };
    pub use crate::application::use_cases::UploadSbomUseCase;
    pub use crate::ports::outbound::{
        BomReceipt, BomRepository, ProgressReporter, ProjectCreation, ProjectRepository,
        SbomReader,
    };
    pub use crate::sbom_upload::domain::{
        Classifier, CollectionLogic, Project, SbomDocument, SbomSource, Tag, UploadForm,
    };
    pub use crate::sbom_upload::policies::{RetryOn, RetryPolicy};
    pub use crate::shared::error::{ExitCode, UploadError};
    pub use crate::shared::Result;
}
