use crate::application::dto::{ViewRequest, ViewResponse};
use crate::manifest::parse_manifest;
use crate::ports::outbound::{ManifestReader, ProgressReporter, ResourceCatalog};
use crate::resource_graph::domain::{NodeKey, ResourceObject};
use crate::resource_graph::services::RelationshipStore;
use crate::shared::error::ViewerError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// BuildViewUseCase - Core use case turning a manifest into a view graph
///
/// Loads every object from the manifest into a fresh relationship store,
/// declares ownership from each object's owner references and renders the
/// view rooted at the requested object.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildViewUseCase<MR, PR> {
    manifest_reader: MR,
    progress_reporter: PR,
    catalog: Arc<dyn ResourceCatalog>,
}

impl<MR, PR> BuildViewUseCase<MR, PR>
where
    MR: ManifestReader,
    PR: ProgressReporter,
{
    /// Creates a new BuildViewUseCase with injected dependencies
    pub fn new(manifest_reader: MR, progress_reporter: PR, catalog: Arc<dyn ResourceCatalog>) -> Self {
        Self {
            manifest_reader,
            progress_reporter,
            catalog,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if the manifest cannot be read or parsed, or if the
    /// root does not name a processed object
    pub fn execute(&self, request: ViewRequest) -> Result<ViewResponse> {
        let objects = self.read_and_report_manifest(&request)?;

        let store = RelationshipStore::new(Arc::clone(&self.catalog)).with_policy(request.policy.clone());
        let processed = self.process_objects(&store, &objects);
        let dangling_owner_refs = self.declare_ownership(&store, &processed);

        let root_key = Self::resolve_root(&store, &request)?;
        let view = store.view_component(root_key.as_str())?;
        tracing::info!(
            root = %root_key,
            nodes = view.nodes().len(),
            edges = view.edges().len(),
            "view rendered"
        );

        Ok(ViewResponse {
            view,
            root_key,
            object_count: processed.len(),
            dangling_owner_refs,
        })
    }

    fn read_and_report_manifest(&self, request: &ViewRequest) -> Result<Vec<ResourceObject>> {
        self.progress_reporter.report(&format!(
            "📖 Loading manifest from: {}",
            request.manifest_path.display()
        ));

        let content = self.manifest_reader.read_manifest(&request.manifest_path)?;
        let objects = parse_manifest(&content).map_err(|e| ViewerError::ManifestParseError {
            path: request.manifest_path.clone(),
            details: format!("{:#}", e),
        })?;

        self.progress_reporter
            .report(&format!("✅ Detected {} object(s)", objects.len()));
        Ok(objects)
    }

    /// Processes every object, skipping the ones that cannot be identified
    fn process_objects<'o>(
        &self,
        store: &RelationshipStore,
        objects: &'o [ResourceObject],
    ) -> Vec<(NodeKey, &'o ResourceObject)> {
        let total = objects.len();
        let mut processed = Vec::with_capacity(total);

        for (index, object) in objects.iter().enumerate() {
            match store.process(object) {
                Ok(key) => processed.push((key, object)),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping object");
                    self.progress_reporter
                        .report_error(&format!("⚠️  Skipping object #{}: {}", index + 1, e));
                }
            }
            self.progress_reporter
                .report_progress(index + 1, total, Some(&object.metadata.name));
        }

        processed
    }

    /// Declares one explicit edge per owner reference whose owner is in the
    /// manifest
    ///
    /// # Returns
    /// The number of owner references that could not be resolved, self
    /// references included
    fn declare_ownership(
        &self,
        store: &RelationshipStore,
        processed: &[(NodeKey, &ResourceObject)],
    ) -> usize {
        let by_uid: HashMap<&str, &NodeKey> = processed
            .iter()
            .map(|(key, object)| (object.metadata.uid.trim(), key))
            .filter(|(uid, _)| !uid.is_empty())
            .collect();

        let mut children_by_owner: BTreeMap<NodeKey, Vec<NodeKey>> = BTreeMap::new();
        let mut dangling = 0;
        let mut self_owned = 0;

        for (child_key, object) in processed {
            for owner in &object.metadata.owner_references {
                match by_uid.get(owner.uid.trim()) {
                    Some(owner_key) if *owner_key == child_key => {
                        self_owned += 1;
                        tracing::warn!(child = %child_key, "object lists itself as its owner");
                        self.progress_reporter.report_error(&format!(
                            "⚠️  {} lists itself as its owner; reference ignored",
                            child_key
                        ));
                    }
                    Some(owner_key) => children_by_owner
                        .entry((*owner_key).clone())
                        .or_default()
                        .push(child_key.clone()),
                    None => {
                        dangling += 1;
                        tracing::warn!(
                            child = %child_key,
                            owner_kind = %owner.kind,
                            owner_name = %owner.name,
                            "owner is not part of the manifest"
                        );
                    }
                }
            }
        }

        for (owner_key, children) in &children_by_owner {
            if let Err(e) = store.add_child(owner_key, children) {
                tracing::warn!(owner = %owner_key, error = %e, "ownership not declared");
                self.progress_reporter.report_error(&format!("⚠️  {}", e));
            }
        }

        if dangling > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} owner reference(s) point at objects missing from the manifest",
                dangling
            ));
        }
        dangling + self_owned
    }

    /// Resolves the root argument to a node key
    ///
    /// A processed key wins; otherwise `Kind/name` is looked up, optionally
    /// scoped to the request namespace.
    fn resolve_root(store: &RelationshipStore, request: &ViewRequest) -> Result<NodeKey> {
        let root = request.root.trim();
        if store.contains(root) {
            return Ok(NodeKey::from(root));
        }

        root.split_once('/')
            .and_then(|(kind, name)| store.find_key(kind, name, request.namespace.as_deref()))
            .ok_or_else(|| {
                ViewerError::RootNotResolved {
                    root: root.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests;
