use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading resource manifests
///
/// This port abstracts where manifest content comes from. Implementations
/// return the raw document text; parsing into resource objects happens in
/// the application layer so every source shares one parser.
pub trait ManifestReader {
    /// Reads the manifest at `path`
    ///
    /// # Returns
    /// The raw JSON or YAML content of the manifest
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The file fails the input safety checks
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest(&self, path: &Path) -> Result<String>;
}
