use crate::resource_graph::policies::AggregationPolicy;
use std::path::PathBuf;

/// ViewRequest - Request DTO for the build view use case
#[derive(Debug, Clone)]
pub struct ViewRequest {
    /// Manifest holding the observed objects
    pub manifest_path: PathBuf,
    /// Root object, given as a node key (UID) or as `Kind/name`
    pub root: String,
    /// Namespace used to disambiguate a `Kind/name` root
    pub namespace: Option<String>,
    /// Individual/aggregate boundary for the rendered view
    pub policy: AggregationPolicy,
}

impl ViewRequest {
    pub fn new(manifest_path: PathBuf, root: impl Into<String>) -> Self {
        Self {
            manifest_path,
            root: root.into(),
            namespace: None,
            policy: AggregationPolicy::default(),
        }
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_policy(mut self, policy: AggregationPolicy) -> Self {
        self.policy = policy;
        self
    }
}
