use super::aggregation_engine::AggregationEngine;
use super::snapshot_renderer::SnapshotRenderer;
use super::status_evaluator::StatusEvaluator;
use crate::ports::outbound::ResourceCatalog;
use crate::resource_graph::domain::{
    GraphError, NodeKey, ObjectDescriptor, ObjectIdentity, ResourceObject, ViewGraph,
};
use crate::resource_graph::policies::AggregationPolicy;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Entry held for each key known to the store
#[derive(Debug, Clone, PartialEq, Eq)]
enum StoredNode {
    /// Declared as a child but not processed yet
    Placeholder,
    Observed(ObjectDescriptor),
}

/// Node and edge collections guarded by the store's lock
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct GraphState {
    nodes: HashMap<NodeKey, StoredNode>,
    children: HashMap<NodeKey, BTreeSet<NodeKey>>,
}

impl GraphState {
    /// Descriptor of a processed node; placeholders yield None
    pub(crate) fn descriptor(&self, key: &NodeKey) -> Option<&ObjectDescriptor> {
        match self.nodes.get(key) {
            Some(StoredNode::Observed(descriptor)) => Some(descriptor),
            _ => None,
        }
    }

    /// Explicit children of `key`, ordered by key
    pub(crate) fn children_of<'a>(
        &'a self,
        key: &NodeKey,
    ) -> impl Iterator<Item = &'a NodeKey> + 'a {
        self.children.get(key).into_iter().flatten()
    }
}

/// RelationshipStore - concurrency-safe graph of observed resource objects
///
/// Objects arrive through `process` and ownership facts through `add_child`,
/// in any order and from any number of threads. All access goes through one
/// `RwLock`: mutations are applied whole under the write lock and snapshots
/// are rendered under the read lock, so a view never observes a
/// half-applied mutation.
///
/// # Example
///
/// ```
/// use resource_viewer::prelude::*;
/// use std::sync::Arc;
///
/// # fn main() -> std::result::Result<(), GraphError> {
/// let store = RelationshipStore::new(Arc::new(KubernetesCatalog::new()));
///
/// let replica_set = ResourceObject::new("apps/v1", "ReplicaSet", "web").with_uid("rs");
/// let pod = ResourceObject::new("v1", "Pod", "web-1").with_uid("pod");
///
/// let rs_key = store.process(&replica_set)?;
/// let pod_key = store.process(&pod)?;
/// store.add_child(&rs_key, &[pod_key])?;
///
/// let view = store.view_component("rs")?;
/// assert_eq!(view.selected().as_str(), "rs");
/// assert!(view.node("pods-rs").is_some());
/// # Ok(())
/// # }
/// ```
pub struct RelationshipStore {
    state: RwLock<GraphState>,
    catalog: Arc<dyn ResourceCatalog>,
    evaluator: StatusEvaluator,
    aggregation: AggregationEngine,
}

impl RelationshipStore {
    /// Creates an empty store using the default status rules and policy
    pub fn new(catalog: Arc<dyn ResourceCatalog>) -> Self {
        Self {
            state: RwLock::new(GraphState::default()),
            catalog,
            evaluator: StatusEvaluator::new(),
            aggregation: AggregationEngine::new(AggregationPolicy::default()),
        }
    }

    pub fn with_policy(mut self, policy: AggregationPolicy) -> Self {
        self.aggregation = AggregationEngine::new(policy);
        self
    }

    pub fn with_evaluator(mut self, evaluator: StatusEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn policy(&self) -> &AggregationPolicy {
        self.aggregation.policy()
    }

    /// Registers or updates the node for `object`
    ///
    /// Status and detail are computed before the lock is taken. Processing
    /// the same identity again overwrites the descriptor but keeps the key
    /// and every edge already attached to it.
    ///
    /// # Returns
    /// The node key of the object
    ///
    /// # Errors
    /// Returns `GraphError::InvalidObject` if the object cannot be
    /// identified; the store is left unchanged
    pub fn process(&self, object: &ResourceObject) -> Result<NodeKey, GraphError> {
        let identity = ObjectIdentity::from_object(object)?;
        let title = self
            .catalog
            .title_for(identity.api_version(), identity.kind());
        let summary = self.evaluator.evaluate(object, &title);
        let key = identity.key();

        tracing::debug!(
            key = %key,
            kind = identity.kind(),
            name = identity.name(),
            status = %summary.status,
            "processed object"
        );

        let descriptor = ObjectDescriptor::new(identity, summary);
        self.write_state()
            .nodes
            .insert(key.clone(), StoredNode::Observed(descriptor));
        Ok(key)
    }

    /// Declares one explicit edge from `parent` to each of `children`
    ///
    /// Children that have not been processed yet are recorded as
    /// placeholders and filled in by a later `process` call.
    ///
    /// # Errors
    /// - `GraphError::SelfLoop` if a child is the parent itself
    /// - `GraphError::UnknownNode` if `parent` has not been processed
    ///
    /// On error no edge from this call is applied.
    pub fn add_child(&self, parent: &NodeKey, children: &[NodeKey]) -> Result<(), GraphError> {
        if children.contains(parent) {
            return Err(GraphError::SelfLoop {
                key: parent.to_string(),
            });
        }

        let mut state = self.write_state();
        if state.descriptor(parent).is_none() {
            return Err(GraphError::UnknownNode {
                key: parent.to_string(),
            });
        }

        for child in children {
            state
                .nodes
                .entry(child.clone())
                .or_insert(StoredNode::Placeholder);
        }
        let edges = state.children.entry(parent.clone()).or_default();
        for child in children {
            if edges.insert(child.clone()) {
                tracing::debug!(parent = %parent, child = %child, "added explicit edge");
            }
        }
        Ok(())
    }

    /// Renders an immutable view graph rooted at `root`
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` if `root` has not been processed
    pub fn view_component(&self, root: &str) -> Result<ViewGraph, GraphError> {
        let state = self.read_state();
        SnapshotRenderer::new(self.catalog.as_ref(), &self.aggregation)
            .render(&state, &NodeKey::from(root))
    }

    /// Finds the key of a processed object by kind and name
    ///
    /// When `namespace` is None, objects in any namespace match and the
    /// smallest matching key is returned.
    pub fn find_key(&self, kind: &str, name: &str, namespace: Option<&str>) -> Option<NodeKey> {
        let state = self.read_state();
        let found = state
            .nodes
            .iter()
            .filter_map(|(key, node)| match node {
                StoredNode::Observed(descriptor) => Some((key, descriptor.identity())),
                StoredNode::Placeholder => None,
            })
            .filter(|(_, identity)| {
                identity.kind().eq_ignore_ascii_case(kind)
                    && identity.name() == name
                    && namespace.map_or(true, |ns| identity.namespace() == Some(ns))
            })
            .map(|(key, _)| key.clone())
            .min();
        found
    }

    /// Whether `key` has been processed
    pub fn contains(&self, key: &str) -> bool {
        self.read_state().descriptor(&NodeKey::from(key)).is_some()
    }

    /// Number of processed nodes (placeholders excluded)
    pub fn node_count(&self) -> usize {
        self.read_state()
            .nodes
            .values()
            .filter(|node| matches!(node, StoredNode::Observed(_)))
            .count()
    }

    /// Number of distinct explicit edges
    pub fn edge_count(&self) -> usize {
        self.read_state().children.values().map(BTreeSet::len).sum()
    }

    // Mutations are validated before they touch the state, so the data
    // behind a poisoned lock is still consistent.
    fn read_state(&self) -> RwLockReadGuard<'_, GraphState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, GraphState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::catalog::KubernetesCatalog;
    use crate::resource_graph::domain::{EdgeType, NodeStatus};
    use serde_json::json;

    fn new_store() -> RelationshipStore {
        RelationshipStore::new(Arc::new(KubernetesCatalog::new()))
    }

    fn widget(name: &str) -> ResourceObject {
        ResourceObject::new("example.com/v1", "Widget", name).with_uid(name)
    }

    fn replica_set(name: &str) -> ResourceObject {
        ResourceObject::new("apps/v1", "ReplicaSet", name)
            .with_uid(name)
            .with_spec(json!({"replicas": 1}))
            .with_status(json!({"replicas": 1, "availableReplicas": 1}))
    }

    fn pod(name: &str) -> ResourceObject {
        ResourceObject::new("v1", "Pod", name).with_uid(name)
    }

    #[test]
    fn test_process_registers_node() {
        let store = new_store();
        let key = store.process(&replica_set("rs")).unwrap();

        assert_eq!(key.as_str(), "rs");
        assert!(store.contains("rs"));
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_process_is_idempotent() {
        let once = new_store();
        once.process(&replica_set("rs")).unwrap();

        let twice = new_store();
        twice.process(&replica_set("rs")).unwrap();
        twice.process(&replica_set("rs")).unwrap();

        assert_eq!(*once.read_state(), *twice.read_state());
    }

    #[test]
    fn test_reprocess_updates_fields_and_keeps_edges() {
        let store = new_store();
        store.process(&replica_set("rs")).unwrap();
        store.process(&pod("p")).unwrap();
        store.add_child(&"rs".into(), &["p".into()]).unwrap();

        let degraded =
            replica_set("rs").with_status(json!({"replicas": 1, "availableReplicas": 0}));
        store.process(&degraded).unwrap();

        let view = store.view_component("rs").unwrap();
        assert_eq!(view.node("rs").unwrap().status, NodeStatus::Error);
        assert!(view.node("pods-rs").is_some());
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_process_invalid_object_leaves_store_unchanged() {
        let store = new_store();
        let result = store.process(&ResourceObject::new("v1", "", ""));

        assert!(matches!(result, Err(GraphError::InvalidObject { .. })));
        assert_eq!(store.node_count(), 0);
    }

    #[test]
    fn test_add_child_unknown_parent() {
        let store = new_store();
        store.process(&pod("p")).unwrap();

        let result = store.add_child(&"missing".into(), &["p".into()]);
        assert_eq!(
            result,
            Err(GraphError::UnknownNode {
                key: "missing".to_string()
            })
        );
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_add_child_placeholder_parent_is_unknown() {
        let store = new_store();
        store.process(&widget("a")).unwrap();
        store.add_child(&"a".into(), &["b".into()]).unwrap();

        let result = store.add_child(&"b".into(), &["c".into()]);
        assert!(matches!(result, Err(GraphError::UnknownNode { .. })));
    }

    #[test]
    fn test_add_child_self_loop_rejected() {
        let store = new_store();
        store.process(&widget("a")).unwrap();

        let result = store.add_child(&"a".into(), &["b".into(), "a".into()]);
        assert!(matches!(result, Err(GraphError::SelfLoop { .. })));
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_add_child_duplicates_collapse() {
        let store = new_store();
        store.process(&widget("a")).unwrap();
        store
            .add_child(&"a".into(), &["b".into(), "b".into()])
            .unwrap();
        store.add_child(&"a".into(), &["b".into()]).unwrap();

        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_child_before_process_matches_process_before_child() {
        let child_first = new_store();
        child_first.process(&replica_set("rs")).unwrap();
        child_first.add_child(&"rs".into(), &["p".into()]).unwrap();
        child_first.process(&pod("p")).unwrap();

        let process_first = new_store();
        process_first.process(&replica_set("rs")).unwrap();
        process_first.process(&pod("p")).unwrap();
        process_first.add_child(&"rs".into(), &["p".into()]).unwrap();

        assert_eq!(
            child_first.view_component("rs").unwrap(),
            process_first.view_component("rs").unwrap()
        );
    }

    #[test]
    fn test_unprocessed_child_is_omitted_from_view() {
        let store = new_store();
        store.process(&replica_set("rs")).unwrap();
        store.add_child(&"rs".into(), &["p".into()]).unwrap();

        let view = store.view_component("rs").unwrap();
        assert_eq!(view.nodes().len(), 1);
        assert!(view.edges().is_empty());
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_view_component_not_found() {
        let store = new_store();
        let result = store.view_component("nonexistent");

        assert_eq!(
            result,
            Err(GraphError::NotFound {
                key: "nonexistent".to_string()
            })
        );
        assert!(result.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_view_component_childless_root() {
        let store = new_store();
        store.process(&widget("solo")).unwrap();

        let view = store.view_component("solo").unwrap();
        assert_eq!(view.nodes().len(), 1);
        assert!(view.edges().is_empty());
        assert_eq!(view.selected().as_str(), "solo");
        assert_eq!(view.node("solo").unwrap().status, NodeStatus::Unknown);
    }

    #[test]
    fn test_view_component_cycle_terminates() {
        let store = new_store();
        store.process(&widget("A")).unwrap();
        store.process(&widget("B")).unwrap();
        store.add_child(&"A".into(), &["B".into()]).unwrap();
        store.add_child(&"B".into(), &["A".into()]).unwrap();

        let view = store.view_component("A").unwrap();
        let keys: Vec<&str> = view.nodes().keys().map(NodeKey::as_str).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(view.edges().len(), 2);
        assert!(view
            .edges()
            .iter()
            .all(|edge| edge.edge_type == EdgeType::Explicit));
    }

    #[test]
    fn test_view_component_diamond_emits_node_once() {
        let store = new_store();
        for name in ["root", "left", "right", "shared"] {
            store.process(&widget(name)).unwrap();
        }
        store
            .add_child(&"root".into(), &["left".into(), "right".into()])
            .unwrap();
        store.add_child(&"left".into(), &["shared".into()]).unwrap();
        store.add_child(&"right".into(), &["shared".into()]).unwrap();

        let policy = AggregationPolicy::default().with_individual_depth(2);
        let store = store.with_policy(policy);
        let view = store.view_component("root").unwrap();

        assert_eq!(view.nodes().len(), 4);
        assert_eq!(view.edges().len(), 4);
    }

    #[test]
    fn test_aggregate_key_does_not_replace_object_with_same_key() {
        let store = new_store();
        store.process(&replica_set("rs")).unwrap();
        store
            .process(&ResourceObject::new("v1", "ConfigMap", "settings").with_uid("pods-rs"))
            .unwrap();
        store.process(&pod("p")).unwrap();
        store
            .add_child(&"rs".into(), &["pods-rs".into(), "p".into()])
            .unwrap();

        let view = store.view_component("rs").unwrap();

        assert_eq!(view.nodes().len(), 3);
        assert_eq!(view.node("pods-rs").unwrap().kind, "ConfigMap");
        let aggregate = view.node("pods-rs-2").unwrap();
        assert_eq!(aggregate.kind, "Pod");
        assert_eq!(aggregate.detail, "Pod count: 1");
        assert_eq!(view.edges().len(), 2);
    }

    #[test]
    fn test_find_key() {
        let store = new_store();
        store
            .process(&replica_set("rs-uid").with_namespace("prod"))
            .unwrap();
        let mut named = replica_set("other-uid");
        named.metadata.name = "web".to_string();
        store.process(&named.with_namespace("dev")).unwrap();

        assert_eq!(
            store.find_key("replicaset", "web", None),
            Some(NodeKey::from("other-uid"))
        );
        assert_eq!(store.find_key("ReplicaSet", "web", Some("prod")), None);
        assert_eq!(store.find_key("Pod", "web", None), None);
    }

    #[test]
    fn test_concurrent_writers_lose_no_updates() {
        let store = new_store();
        store.process(&replica_set("rs")).unwrap();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let store = &store;
                scope.spawn(move || {
                    for i in 0..25 {
                        let name = format!("pod-{}-{}", worker, i);
                        let key = store.process(&pod(&name)).unwrap();
                        store.add_child(&"rs".into(), &[key]).unwrap();
                        store.view_component("rs").unwrap();
                    }
                });
            }
        });

        assert_eq!(store.node_count(), 1 + 8 * 25);
        assert_eq!(store.edge_count(), 8 * 25);
        let view = store.view_component("rs").unwrap();
        assert_eq!(view.node("pods-rs").unwrap().detail, "Pod count: 200");
    }
}
