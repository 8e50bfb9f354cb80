use crate::resource_graph::domain::ObjectIdentity;

/// Display metadata registered for one resource kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescription {
    /// API version the entry was registered under
    pub api_version: String,
    /// Resource kind (e.g. "ReplicaSet")
    pub kind: String,
    /// Human-readable title of a single object (e.g. "Replica Set")
    pub title: String,
    /// Title of the list page (e.g. "Workloads / Replica Sets")
    pub list_title: String,
    /// Navigation path of the list page (e.g. "/workloads/replica-sets")
    pub path: String,
}

/// ResourceCatalog port for resolving resource kinds to display metadata
///
/// This port abstracts the resource registry that knows how each kind is
/// titled and where its detail page lives. The relationship store receives
/// a catalog at construction instead of consulting process-wide state.
pub trait ResourceCatalog: Send + Sync {
    /// Looks up the description for an (apiVersion, kind) pair
    ///
    /// # Returns
    /// The registered description, or None for kinds the catalog does not know
    fn describe(&self, api_version: &str, kind: &str) -> Option<&ResourceDescription>;

    /// Builds the navigable path of an individually rendered object
    ///
    /// # Returns
    /// The path, or None when the kind has no detail page
    fn path_for(&self, identity: &ObjectIdentity) -> Option<String>;

    /// Display title of a kind, falling back to the kind itself
    fn title_for(&self, api_version: &str, kind: &str) -> String {
        self.describe(api_version, kind)
            .map(|description| description.title.clone())
            .unwrap_or_else(|| kind.to_string())
    }
}
