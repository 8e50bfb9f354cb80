mod aggregation_policy;
mod kind_status;

pub use aggregation_policy::{AggregationPolicy, DEFAULT_AGGREGATE_KINDS, DEFAULT_INDIVIDUAL_DEPTH};
pub use kind_status::{
    default_rules, replica_verdict, DaemonSetStatus, JobStatus, KindStatus, PodStatus,
    ReplicatedStatus, StatefulSetStatus,
};
