use crate::ports::outbound::ManifestReader;
use crate::shared::error::ViewerError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading manifests from the file system
///
/// This adapter implements the ManifestReader port. Every read goes through
/// the shared input checks (no symlinks, regular files only, size cap).
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Overrides the maximum accepted manifest size in bytes
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let size = validate_input_file(path, file_type, self.max_file_size)?;
        tracing::debug!(path = %path.display(), size, "reading {}", file_type);

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ViewerError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No file exists at \"{}\".\n   \
                     Export objects with `kubectl get <kinds> -o yaml > objects.yaml` and pass the file with --input.",
                    path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(path, "manifest").map_err(|e| {
            ViewerError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
