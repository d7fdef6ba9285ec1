/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that sequences the upload
/// workflow and coordinates with infrastructure through ports.
pub mod dto;
pub mod use_cases;
