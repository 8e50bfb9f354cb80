mod aggregation_engine;
mod relationship_store;
mod snapshot_renderer;
mod status_evaluator;

pub use aggregation_engine::{pluralize, AggregateNode, AggregationEngine, ChildPlacement};
pub use relationship_store::RelationshipStore;
pub use status_evaluator::StatusEvaluator;
