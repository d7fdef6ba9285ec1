use crate::ports::outbound::SbomReader;
use crate::sbom_upload::domain::{SbomDocument, SbomSource};
use crate::shared::error::UploadError;
use crate::shared::Result;
use anyhow::Context;
use std::cell::RefCell;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemSbomReader adapter for reading the SBOM from a file or stdin
///
/// The payload is opaque and read whole, whatever its size.
/// The stdin handle is injectable so tests can substitute any reader.
pub struct FileSystemSbomReader<R = io::Stdin> {
    stdin: RefCell<R>,
}

impl FileSystemSbomReader {
    pub fn new() -> Self {
        Self::with_stdin(io::stdin())
    }
}

impl Default for FileSystemSbomReader {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Read> FileSystemSbomReader<R> {
    pub fn with_stdin(stdin: R) -> Self {
        Self {
            stdin: RefCell::new(stdin),
        }
    }

    fn read_file(path: &Path) -> Result<Vec<u8>> {
        let read_error = |details: String| UploadError::SbomReadError {
            path: path.to_path_buf(),
            details,
        };

        let metadata = fs::metadata(path).map_err(|e| read_error(e.to_string()))?;
        if metadata.is_dir() {
            return Err(read_error("Path is a directory, not a file".to_string()).into());
        }

        fs::read(path).map_err(|e| read_error(e.to_string()).into())
    }

    fn read_stdin(&self) -> Result<Vec<u8>> {
        let mut content = Vec::new();
        self.stdin
            .borrow_mut()
            .read_to_end(&mut content)
            .context("Failed to read SBOM from stdin")?;
        Ok(content)
    }
}

impl<R: Read> SbomReader for FileSystemSbomReader<R> {
    fn read_sbom(&self, source: &SbomSource) -> Result<SbomDocument> {
        let content = match source {
            SbomSource::File(path) => Self::read_file(path)?,
            SbomSource::Stdin => self.read_stdin()?,
        };
        Ok(SbomDocument::new(source.clone(), content))
    }
}
