use crate::resource_graph::domain::{NodeStatus, ResourceObject, StatusSummary};

/// Container waiting reasons that mean the pod cannot make progress
const FATAL_WAITING_REASONS: &[&str] = &[
    "CrashLoopBackOff",
    "ErrImagePull",
    "ImagePullBackOff",
    "CreateContainerConfigError",
    "InvalidImageName",
];

/// Health rule for one family of resource kinds
///
/// Implementations must be pure and total: every object yields a summary,
/// with `unknown` standing in for state that cannot be read.
pub trait KindStatus: Send + Sync {
    /// Kinds this rule classifies
    fn kinds(&self) -> &[&'static str];

    /// Classifies `object`; `title` is the catalog title used in the detail text
    fn evaluate(&self, object: &ResourceObject, title: &str) -> StatusSummary;
}

/// Compares an observed ready count against a desired count
///
/// Shared by every controller-style kind:
/// - no observable desired count: unknown
/// - desired is zero (scaled down) or all ready: ok
/// - none ready: error
/// - some ready: warning
pub fn replica_verdict(title: &str, desired: Option<i64>, ready: Option<i64>) -> StatusSummary {
    let Some(desired) = desired else {
        return StatusSummary::unknown(title);
    };
    let ready = ready.unwrap_or(0);

    if desired <= 0 || ready >= desired {
        StatusSummary::new(NodeStatus::Ok, format!("{} is OK", title))
    } else if ready <= 0 {
        StatusSummary::new(
            NodeStatus::Error,
            format!("{} has no ready replicas (0/{})", title, desired),
        )
    } else {
        StatusSummary::new(
            NodeStatus::Warning,
            format!("{} is not ready ({}/{})", title, ready, desired),
        )
    }
}

fn desired_replicas(object: &ResourceObject) -> Option<i64> {
    object
        .spec_int("/replicas")
        .or_else(|| object.status_int("/replicas"))
}

/// Deployments, replica sets and replication controllers
pub struct ReplicatedStatus;

impl KindStatus for ReplicatedStatus {
    fn kinds(&self) -> &[&'static str] {
        &["Deployment", "ReplicaSet", "ReplicationController"]
    }

    fn evaluate(&self, object: &ResourceObject, title: &str) -> StatusSummary {
        let ready = object
            .status_int("/availableReplicas")
            .or_else(|| object.status_int("/readyReplicas"));
        replica_verdict(title, desired_replicas(object), ready)
    }
}

pub struct StatefulSetStatus;

impl KindStatus for StatefulSetStatus {
    fn kinds(&self) -> &[&'static str] {
        &["StatefulSet"]
    }

    fn evaluate(&self, object: &ResourceObject, title: &str) -> StatusSummary {
        replica_verdict(
            title,
            desired_replicas(object),
            object.status_int("/readyReplicas"),
        )
    }
}

pub struct DaemonSetStatus;

impl KindStatus for DaemonSetStatus {
    fn kinds(&self) -> &[&'static str] {
        &["DaemonSet"]
    }

    fn evaluate(&self, object: &ResourceObject, title: &str) -> StatusSummary {
        let ready = object
            .status_int("/numberReady")
            .or_else(|| object.status_int("/numberAvailable"));
        replica_verdict(title, object.status_int("/desiredNumberScheduled"), ready)
    }
}

pub struct JobStatus;

impl KindStatus for JobStatus {
    fn kinds(&self) -> &[&'static str] {
        &["Job"]
    }

    fn evaluate(&self, object: &ResourceObject, title: &str) -> StatusSummary {
        if !object.has_status() {
            return StatusSummary::unknown(title);
        }

        let completions = object.spec_int("/completions").unwrap_or(1);
        let succeeded = object.status_int("/succeeded").unwrap_or(0);
        let active = object.status_int("/active").unwrap_or(0);
        let failed = object.status_int("/failed").unwrap_or(0);

        if succeeded >= completions {
            StatusSummary::new(NodeStatus::Ok, format!("{} is OK", title))
        } else if active > 0 {
            StatusSummary::new(
                NodeStatus::Warning,
                format!("{} is running ({}/{} succeeded)", title, succeeded, completions),
            )
        } else if failed > 0 {
            StatusSummary::new(
                NodeStatus::Error,
                format!("{} has failed ({} failed)", title, failed),
            )
        } else {
            StatusSummary::new(NodeStatus::Warning, format!("{} is pending", title))
        }
    }
}

pub struct PodStatus;

impl PodStatus {
    fn container_statuses(object: &ResourceObject) -> &[serde_json::Value] {
        object
            .status
            .pointer("/containerStatuses")
            .and_then(serde_json::Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl KindStatus for PodStatus {
    fn kinds(&self) -> &[&'static str] {
        &["Pod"]
    }

    fn evaluate(&self, object: &ResourceObject, title: &str) -> StatusSummary {
        let phase = object.status_str("/phase");
        if phase == Some("Failed") {
            return StatusSummary::new(NodeStatus::Error, format!("{} has failed", title));
        }

        let containers = Self::container_statuses(object);
        for container in containers {
            let reason = container
                .pointer("/state/waiting/reason")
                .and_then(serde_json::Value::as_str);
            if let Some(reason) = reason.filter(|r| FATAL_WAITING_REASONS.contains(r)) {
                let name = container
                    .get("name")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("container");
                return StatusSummary::new(
                    NodeStatus::Error,
                    format!("{} container {} is in {}", title, name, reason),
                );
            }
        }

        let restarts: i64 = containers
            .iter()
            .filter_map(|c| c.get("restartCount").and_then(serde_json::Value::as_i64))
            .sum();
        if restarts > 0 {
            return StatusSummary::new(
                NodeStatus::Warning,
                format!("{} has restarted {} time(s)", title, restarts),
            );
        }

        match phase {
            Some("Pending") => {
                StatusSummary::new(NodeStatus::Warning, format!("{} is pending", title))
            }
            Some("Unknown") => StatusSummary::unknown(title),
            _ => StatusSummary::new(NodeStatus::Ok, format!("{} is OK", title)),
        }
    }
}

/// Rules installed by default, one per supported kind family
pub fn default_rules() -> Vec<Box<dyn KindStatus>> {
    vec![
        Box::new(ReplicatedStatus),
        Box::new(StatefulSetStatus),
        Box::new(DaemonSetStatus),
        Box::new(JobStatus),
        Box::new(PodStatus),
    ]
}
