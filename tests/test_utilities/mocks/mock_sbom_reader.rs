use sbom_uploader::prelude::*;

/// Mock SbomReader for testing
pub struct MockSbomReader {
    pub content: Vec<u8>,
    pub should_fail: bool,
}

impl MockSbomReader {
    pub fn new(content: &[u8]) -> Self {
        Self {
            content: content.to_vec(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: Vec::new(),
            should_fail: true,
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, source: &SbomSource) -> Result<SbomDocument> {
        if self.should_fail {
            anyhow::bail!("Mock SBOM reader failure");
        }
        Ok(SbomDocument::new(source.clone(), self.content.clone()))
    }
}
