pub mod project;
pub mod sbom_document;
pub mod upload_form;

pub use project::{Classifier, CollectionLogic, Project, Tag};
pub use sbom_document::{SbomDocument, SbomSource};
pub use upload_form::UploadForm;
