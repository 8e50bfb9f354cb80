use crate::resource_graph::domain::EdgeType;
use std::collections::BTreeSet;

/// Default depth down to which children are rendered individually
pub const DEFAULT_INDIVIDUAL_DEPTH: usize = 1;

/// Kinds aggregated by default regardless of depth
pub const DEFAULT_AGGREGATE_KINDS: &[&str] = &["Pod"];

/// AggregationPolicy decides which children render as their own node
///
/// A child is rendered individually when its depth below the root is at
/// most `individual_depth` and its kind is not listed in `aggregate_kinds`.
/// Everything else is folded into one aggregate node per (parent, kind).
///
/// The default (`individual_depth = 1`, `aggregate_kinds = ["Pod"]`) shows
/// the controller chain directly under the selected object and collapses
/// the instances those controllers own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationPolicy {
    individual_depth: usize,
    aggregate_kinds: BTreeSet<String>,
    aggregate_edge: EdgeType,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            individual_depth: DEFAULT_INDIVIDUAL_DEPTH,
            aggregate_kinds: DEFAULT_AGGREGATE_KINDS
                .iter()
                .map(|kind| kind.to_lowercase())
                .collect(),
            aggregate_edge: EdgeType::Implicit,
        }
    }
}

impl AggregationPolicy {
    pub fn with_individual_depth(mut self, depth: usize) -> Self {
        self.individual_depth = depth;
        self
    }

    /// Replaces the always-aggregated kinds (matched case-insensitively)
    pub fn with_aggregate_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.aggregate_kinds = kinds
            .into_iter()
            .map(|kind| kind.as_ref().trim().to_lowercase())
            .filter(|kind| !kind.is_empty())
            .collect();
        self
    }

    /// Edge type connecting a parent to its aggregate nodes
    pub fn with_aggregate_edge(mut self, edge_type: EdgeType) -> Self {
        self.aggregate_edge = edge_type;
        self
    }

    pub fn individual_depth(&self) -> usize {
        self.individual_depth
    }

    pub fn aggregate_edge(&self) -> EdgeType {
        self.aggregate_edge
    }

    pub fn aggregate_kinds(&self) -> impl Iterator<Item = &str> {
        self.aggregate_kinds.iter().map(String::as_str)
    }

    /// Whether children of `kind` found at `depth` below the root collapse
    pub fn should_aggregate(&self, kind: &str, depth: usize) -> bool {
        depth > self.individual_depth || self.aggregate_kinds.contains(&kind.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = AggregationPolicy::default();

        assert_eq!(policy.individual_depth(), 1);
        assert_eq!(policy.aggregate_edge(), EdgeType::Implicit);
        assert!(!policy.should_aggregate("ReplicaSet", 1));
        assert!(policy.should_aggregate("ReplicaSet", 2));
        assert!(policy.should_aggregate("Pod", 1));
    }

    #[test]
    fn test_aggregate_kinds_case_insensitive() {
        let policy = AggregationPolicy::default().with_aggregate_kinds(["  Job "]);

        assert!(policy.should_aggregate("job", 1));
        assert!(!policy.should_aggregate("Pod", 1));
        assert_eq!(policy.aggregate_kinds().collect::<Vec<_>>(), vec!["job"]);
    }

    #[test]
    fn test_deeper_individual_depth() {
        let policy = AggregationPolicy::default()
            .with_individual_depth(3)
            .with_aggregate_kinds(Vec::<String>::new());

        assert!(!policy.should_aggregate("Pod", 3));
        assert!(policy.should_aggregate("Pod", 4));
    }

    #[test]
    fn test_blank_kinds_are_ignored() {
        let policy = AggregationPolicy::default().with_aggregate_kinds(["", "   "]);
        assert_eq!(policy.aggregate_kinds().count(), 0);
    }
}
