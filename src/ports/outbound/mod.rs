/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod bom_repository;
pub mod progress_reporter;
pub mod project_repository;
pub mod sbom_reader;

pub use bom_repository::{BomReceipt, BomRepository};
pub use progress_reporter::ProgressReporter;
pub use project_repository::{ProjectCreation, ProjectRepository};
pub use sbom_reader::SbomReader;
