use thiserror::Error;

/// Errors returned by the relationship store
///
/// Every variant is returned to the immediate caller and leaves the store
/// unchanged. Status evaluation has no error variant: unreadable state
/// degrades to an `unknown` status instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Object is missing the fields needed to identify it
    #[error("Invalid object: {reason}")]
    InvalidObject { reason: String },

    /// Relationship declared for a parent that was never processed
    #[error("Unknown node: {key}\n\n💡 Hint: Process the parent object before declaring its children")]
    UnknownNode { key: String },

    /// View requested for a root that is not in the store
    #[error("Node not found: {key}")]
    NotFound { key: String },

    /// Relationship from a node to itself
    #[error("Node cannot own itself: {key}")]
    SelfLoop { key: String },
}
