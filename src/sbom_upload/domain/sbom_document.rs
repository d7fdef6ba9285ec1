use std::fmt;
use std::path::PathBuf;

/// Where the SBOM bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SbomSource {
    File(PathBuf),
    Stdin,
}

impl SbomSource {
    /// An empty or missing path means standard input
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => SbomSource::File(path),
            _ => SbomSource::Stdin,
        }
    }
}

impl fmt::Display for SbomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SbomSource::File(path) => write!(f, "{}", path.display()),
            SbomSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// SBOM payload, treated as an opaque byte blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomDocument {
    source: SbomSource,
    content: Vec<u8>,
}

impl SbomDocument {
    pub fn new(source: SbomSource, content: Vec<u8>) -> Self {
        Self { source, content }
    }

    pub fn source(&self) -> &SbomSource {
        &self.source
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}
