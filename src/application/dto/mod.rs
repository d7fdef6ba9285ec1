/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod upload_request;
mod upload_response;
mod upload_settings;

pub use upload_request::UploadRequest;
pub use upload_response::{ParentProjectStatus, UploadResponse};
pub use upload_settings::UploadSettings;
