use super::{NodeKey, NodeStatus};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Type of a relationship between two nodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// Ownership asserted by the caller
    #[default]
    Explicit,
    /// Relationship synthesized for an aggregate node
    Implicit,
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeType::Explicit => write!(f, "explicit"),
            EdgeType::Implicit => write!(f, "implicit"),
        }
    }
}

impl std::str::FromStr for EdgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "explicit" => Ok(EdgeType::Explicit),
            "implicit" => Ok(EdgeType::Implicit),
            _ => Err(format!(
                "Invalid edge type: {}. Please specify 'explicit' or 'implicit'",
                s
            )),
        }
    }
}

/// Renderable node of a view graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub status: NodeStatus,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Directed edge of a view graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source: NodeKey,
    pub target: NodeKey,
    pub edge_type: EdgeType,
}

/// Immutable snapshot handed to the display layer
///
/// A `ViewGraph` owns all of its data; nothing in it refers back to the
/// store that produced it. The default value is the empty graph returned
/// alongside a lookup failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewGraph {
    nodes: BTreeMap<NodeKey, Node>,
    edges: Vec<Edge>,
    selected: NodeKey,
}

impl ViewGraph {
    pub fn nodes(&self) -> &BTreeMap<NodeKey, Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn selected(&self) -> &NodeKey {
        &self.selected
    }

    pub fn node(&self, key: &str) -> Option<&Node> {
        self.nodes.get(&NodeKey::from(key))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Outgoing edges of `key`, in insertion order
    pub fn edges_from<'a>(&'a self, key: &'a NodeKey) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| &edge.source == key)
    }

    /// Most severe status among all nodes in the view
    pub fn worst_status(&self) -> NodeStatus {
        NodeStatus::most_severe(self.nodes.values().map(|node| node.status))
    }
}

/// Mutable accumulator that produces a `ViewGraph`
///
/// Enforces the edge invariants while a view is being assembled:
/// self-loops are dropped and repeated edges collapse to one.
#[derive(Debug, Default)]
pub struct ViewGraphBuilder {
    nodes: BTreeMap<NodeKey, Node>,
    edges: Vec<Edge>,
    seen_edges: HashSet<(NodeKey, NodeKey)>,
    selected: NodeKey,
}

impl ViewGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, key: NodeKey, node: Node) {
        self.nodes.insert(key, node);
    }

    pub fn contains_node(&self, key: &NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Adds an edge, returning false if it was a self-loop or a duplicate
    pub fn add_edge(&mut self, source: NodeKey, target: NodeKey, edge_type: EdgeType) -> bool {
        if source == target {
            return false;
        }
        if !self.seen_edges.insert((source.clone(), target.clone())) {
            return false;
        }
        self.edges.push(Edge {
            source,
            target,
            edge_type,
        });
        true
    }

    pub fn select(&mut self, key: NodeKey) {
        self.selected = key;
    }

    pub fn build(self) -> ViewGraph {
        ViewGraph {
            nodes: self.nodes,
            edges: self.edges,
            selected: self.selected,
        }
    }
}
