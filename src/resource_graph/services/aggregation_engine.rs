use crate::resource_graph::domain::{Node, NodeKey, NodeStatus, ObjectDescriptor};
use crate::resource_graph::policies::AggregationPolicy;
use std::collections::BTreeMap;

/// Synthetic node standing in for a collection of same-kind children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateNode {
    pub key: NodeKey,
    pub node: Node,
    pub member_count: usize,
}

/// How one child (or group of children) of a parent is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildPlacement<'a> {
    /// Child rendered as its own node and expanded further
    Individual(&'a ObjectDescriptor),
    /// Children of one kind folded into a single summary node
    Aggregate(AggregateNode),
}

/// AggregationEngine service folding sibling collections into summaries
///
/// Contains pure logic only; the policy decides which kind-groups fold.
pub struct AggregationEngine {
    policy: AggregationPolicy,
}

impl AggregationEngine {
    pub fn new(policy: AggregationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AggregationPolicy {
        &self.policy
    }

    /// Partitions the children of `parent` by kind and places each group
    ///
    /// # Arguments
    /// * `parent` - The parent whose children are being placed
    /// * `children` - Direct children, in the order they should be emitted
    /// * `depth` - Depth of the children below the view root
    ///
    /// # Returns
    /// Placements ordered by kind, then by the order of `children`
    pub fn place_children<'a>(
        &self,
        parent: &ObjectDescriptor,
        children: &[&'a ObjectDescriptor],
        depth: usize,
    ) -> Vec<ChildPlacement<'a>> {
        let mut groups: BTreeMap<&str, Vec<&'a ObjectDescriptor>> = BTreeMap::new();
        for child in children {
            groups
                .entry(child.identity().kind())
                .or_default()
                .push(*child);
        }

        let mut placements = Vec::new();
        for (kind, members) in groups {
            if self.policy.should_aggregate(kind, depth) {
                placements.push(ChildPlacement::Aggregate(
                    self.summarize(parent, kind, &members),
                ));
            } else {
                placements.extend(members.into_iter().map(ChildPlacement::Individual));
            }
        }
        placements
    }

    /// Builds the aggregate node for `members` of `kind` under `parent`
    ///
    /// The key is `<kind-plural>-<parentKey>`, the status is the most severe
    /// member status, and the detail is `"<Kind> count: <n>"`. Aggregates
    /// never carry a path.
    pub fn summarize(
        &self,
        parent: &ObjectDescriptor,
        kind: &str,
        members: &[&ObjectDescriptor],
    ) -> AggregateNode {
        let plural = pluralize(kind);
        let api_version = members
            .first()
            .map(|member| member.identity().api_version().to_string())
            .unwrap_or_default();
        let status = NodeStatus::most_severe(members.iter().map(|m| m.summary().status));

        AggregateNode {
            key: NodeKey::new(format!("{}-{}", plural, parent.key())),
            node: Node {
                api_version,
                kind: kind.to_string(),
                name: format!("{} {}", parent.identity().name(), plural),
                status,
                detail: format!("{} count: {}", kind, members.len()),
                path: None,
            },
            member_count: members.len(),
        }
    }
}

/// Lowercase plural of a kind name ("Pod" -> "pods", "Ingress" -> "ingresses")
pub fn pluralize(kind: &str) -> String {
    let lower = kind.to_lowercase();
    if lower.ends_with('s') || lower.ends_with('x') || lower.ends_with("ch") {
        format!("{}es", lower)
    } else if let Some(stem) = lower.strip_suffix('y') {
        if stem.ends_with(['a', 'e', 'i', 'o', 'u']) {
            format!("{}s", lower)
        } else {
            format!("{}ies", stem)
        }
    } else {
        format!("{}s", lower)
    }
}
