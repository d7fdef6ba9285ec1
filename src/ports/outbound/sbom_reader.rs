use crate::sbom_upload::domain::{SbomDocument, SbomSource};
use crate::shared::Result;

/// SbomReader port for obtaining the SBOM payload
///
/// Implementations read the whole source into memory. They do not judge
/// whether an empty payload is acceptable; that decision belongs to the
/// caller, which knows where the bytes came from.
pub trait SbomReader {
    /// Reads all bytes from the given source
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file exceeds the size limit
    /// - Standard input cannot be read
    fn read_sbom(&self, source: &SbomSource) -> Result<SbomDocument>;
}
