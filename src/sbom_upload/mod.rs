/// Domain layer - upload workflow model and policies
///
/// Everything in here is free of I/O: the project wire record, the SBOM
/// payload, the multipart form contents, and the retry policy.
pub mod domain;
pub mod policies;
