/// Filesystem adapters for reading the SBOM payload
mod sbom_reader;

pub use sbom_reader::FileSystemSbomReader;
