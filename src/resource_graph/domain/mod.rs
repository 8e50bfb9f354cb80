pub mod graph_error;
pub mod node_status;
pub mod object_identity;
pub mod resource_object;
pub mod view_graph;

pub use graph_error::GraphError;
pub use node_status::{NodeStatus, StatusSummary};
pub use object_identity::{NodeKey, ObjectDescriptor, ObjectIdentity};
pub use resource_object::{ObjectMeta, OwnerReference, ResourceObject};
pub use view_graph::{Edge, EdgeType, Node, ViewGraph, ViewGraphBuilder};
