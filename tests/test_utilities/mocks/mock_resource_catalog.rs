use resource_viewer::prelude::*;

/// Mock ResourceCatalog with caller-chosen titles and `/mock` paths
#[derive(Default)]
pub struct MockResourceCatalog {
    descriptions: Vec<ResourceDescription>,
}

impl MockResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, kind: &str, title: &str) -> Self {
        self.descriptions.push(ResourceDescription {
            api_version: String::new(),
            kind: kind.to_string(),
            title: title.to_string(),
            list_title: format!("{}s", title),
            path: format!("/{}", kind.to_lowercase()),
        });
        self
    }
}

impl ResourceCatalog for MockResourceCatalog {
    fn describe(&self, _api_version: &str, kind: &str) -> Option<&ResourceDescription> {
        self.descriptions.iter().find(|d| d.kind == kind)
    }

    fn path_for(&self, identity: &ObjectIdentity) -> Option<String> {
        let description = self.describe(identity.api_version(), identity.kind())?;
        Some(format!("/mock{}/{}", description.path, identity.name()))
    }
}
