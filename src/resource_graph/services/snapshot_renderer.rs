use super::aggregation_engine::{AggregationEngine, ChildPlacement};
use super::relationship_store::GraphState;
use crate::ports::outbound::ResourceCatalog;
use crate::resource_graph::domain::{
    EdgeType, GraphError, Node, NodeKey, ObjectDescriptor, ViewGraph, ViewGraphBuilder,
};
use std::collections::{HashSet, VecDeque};

/// SnapshotRenderer service walking the graph reachable from a root
///
/// Performs a breadth-first traversal guarded by a visited set, so cycles
/// terminate and every node is emitted at most once; a repeated visit only
/// contributes an edge. Children are placed by the aggregation engine and
/// traversal never descends past an aggregate.
pub(crate) struct SnapshotRenderer<'a> {
    catalog: &'a dyn ResourceCatalog,
    aggregation: &'a AggregationEngine,
}

impl<'a> SnapshotRenderer<'a> {
    pub fn new(catalog: &'a dyn ResourceCatalog, aggregation: &'a AggregationEngine) -> Self {
        Self {
            catalog,
            aggregation,
        }
    }

    /// Renders the view graph rooted at `root`
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` if `root` was never processed
    pub(super) fn render(
        &self,
        state: &GraphState,
        root: &NodeKey,
    ) -> Result<ViewGraph, GraphError> {
        let root_descriptor = state.descriptor(root).ok_or_else(|| GraphError::NotFound {
            key: root.to_string(),
        })?;

        let mut builder = ViewGraphBuilder::new();
        builder.add_node(root.clone(), self.individual_node(root_descriptor));
        builder.select(root.clone());

        let mut visited: HashSet<NodeKey> = HashSet::from([root.clone()]);
        let mut queue: VecDeque<(&ObjectDescriptor, usize)> = VecDeque::new();
        queue.push_back((root_descriptor, 0));

        while let Some((parent, depth)) = queue.pop_front() {
            let parent_key = parent.key();
            let mut unvisited = Vec::new();

            for child_key in state.children_of(&parent_key) {
                if visited.contains(child_key) {
                    builder.add_edge(parent_key.clone(), child_key.clone(), EdgeType::Explicit);
                    continue;
                }
                match state.descriptor(child_key) {
                    Some(child) => unvisited.push(child),
                    None => tracing::debug!(
                        parent = %parent_key,
                        child = %child_key,
                        "skipping child that has not been processed yet"
                    ),
                }
            }

            for placement in self.aggregation.place_children(parent, &unvisited, depth + 1) {
                match placement {
                    ChildPlacement::Individual(child) => {
                        let child_key = child.key();
                        visited.insert(child_key.clone());
                        builder.add_node(child_key.clone(), self.individual_node(child));
                        builder.add_edge(parent_key.clone(), child_key, EdgeType::Explicit);
                        queue.push_back((child, depth + 1));
                    }
                    ChildPlacement::Aggregate(aggregate) => {
                        let key = Self::free_aggregate_key(state, &builder, aggregate.key);
                        builder.add_node(key.clone(), aggregate.node);
                        builder.add_edge(
                            parent_key.clone(),
                            key,
                            self.aggregation.policy().aggregate_edge(),
                        );
                    }
                }
            }
        }

        Ok(builder.build())
    }

    /// Aggregate keys are synthetic and may clash with an object key;
    /// a numeric suffix keeps node keys unique within the view.
    fn free_aggregate_key(
        state: &GraphState,
        builder: &ViewGraphBuilder,
        key: NodeKey,
    ) -> NodeKey {
        let taken = |candidate: &NodeKey| {
            state.descriptor(candidate).is_some() || builder.contains_node(candidate)
        };
        if !taken(&key) {
            return key;
        }

        let mut suffix = 2;
        loop {
            let candidate = NodeKey::new(format!("{}-{}", key, suffix));
            if !taken(&candidate) {
                tracing::warn!(
                    key = %key,
                    renamed = %candidate,
                    "aggregate key collides with an existing node"
                );
                return candidate;
            }
            suffix += 1;
        }
    }

    fn individual_node(&self, descriptor: &ObjectDescriptor) -> Node {
        let identity = descriptor.identity();
        let summary = descriptor.summary();
        Node {
            api_version: identity.api_version().to_string(),
            kind: identity.kind().to_string(),
            name: identity.name().to_string(),
            status: summary.status,
            detail: summary.detail.clone(),
            path: self.catalog.path_for(identity),
        }
    }
}
