/// Use cases module containing application business logic orchestration
mod upload_sbom;

pub use upload_sbom::UploadSbomUseCase;
