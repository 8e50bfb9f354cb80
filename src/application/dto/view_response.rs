use crate::resource_graph::domain::{NodeKey, ViewGraph};

/// ViewResponse - Response DTO of the build view use case
#[derive(Debug, Clone)]
pub struct ViewResponse {
    /// Rendered snapshot rooted at the requested object
    pub view: ViewGraph,
    /// Key the root argument resolved to
    pub root_key: NodeKey,
    /// Objects ingested from the manifest
    pub object_count: usize,
    /// Owner references that were ignored: the owner is absent from the
    /// manifest or is the object itself
    pub dangling_owner_refs: usize,
}
