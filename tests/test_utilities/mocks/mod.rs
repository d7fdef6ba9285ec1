/// Mock implementations for testing
mod mock_bom_repository;
mod mock_progress_reporter;
mod mock_project_repository;
mod mock_sbom_reader;

pub use mock_bom_repository::MockBomRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_repository::MockProjectRepository;
pub use mock_sbom_reader::MockSbomReader;
