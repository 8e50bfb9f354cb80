use resource_viewer::prelude::*;
use std::path::Path;

/// Mock ManifestReader serving fixed content
pub struct MockManifestReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }
        Ok(self.content.clone())
    }
}
