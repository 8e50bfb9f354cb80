use serde::{Deserialize, Serialize};
use std::fmt;

/// Health classification of a node
///
/// Variants are declared in ascending severity so the derived `Ord`
/// matches the combination rule `error > warning > ok > unknown`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Unknown,
    Ok,
    Warning,
    Error,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Unknown => "unknown",
            NodeStatus::Ok => "ok",
            NodeStatus::Warning => "warning",
            NodeStatus::Error => "error",
        }
    }

    /// Most severe status of `statuses`, or `Unknown` when empty
    pub fn most_severe<I>(statuses: I) -> NodeStatus
    where
        I: IntoIterator<Item = NodeStatus>,
    {
        statuses.into_iter().max().unwrap_or_default()
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NodeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(NodeStatus::Unknown),
            "ok" => Ok(NodeStatus::Ok),
            "warning" | "warn" => Ok(NodeStatus::Warning),
            "error" => Ok(NodeStatus::Error),
            _ => Err(format!(
                "Invalid status: {}. Please specify 'ok', 'warning', 'error' or 'unknown'",
                s
            )),
        }
    }
}

/// Status verdict plus the one-line detail shown next to a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    pub status: NodeStatus,
    pub detail: String,
}

impl StatusSummary {
    pub fn new(status: NodeStatus, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn unknown(title: &str) -> Self {
        Self::new(NodeStatus::Unknown, format!("{} status is unknown", title))
    }
}
