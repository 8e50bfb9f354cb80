use super::{GraphError, ResourceObject, StatusSummary};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for object names (matches the cluster's DNS subdomain limit)
const MAX_NAME_LENGTH: usize = 253;

/// NewType wrapper for the stable key of a node in the graph
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for NodeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Normalized identity of an observed object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdentity {
    api_version: String,
    kind: String,
    name: String,
    namespace: Option<String>,
    uid: Option<String>,
}

impl ObjectIdentity {
    /// Extracts the identity from a raw object without modifying it
    ///
    /// # Errors
    /// Returns `GraphError::InvalidObject` if the kind is missing, if both
    /// name and UID are missing, or if the name exceeds the length limit
    pub fn from_object(object: &ResourceObject) -> Result<Self, GraphError> {
        let kind = object.kind.trim();
        if kind.is_empty() {
            return Err(GraphError::InvalidObject {
                reason: "kind is missing".to_string(),
            });
        }

        let name = object.metadata.name.trim();
        let uid = object.metadata.uid.trim();
        if name.is_empty() && uid.is_empty() {
            return Err(GraphError::InvalidObject {
                reason: format!("{} has neither a name nor a UID", kind),
            });
        }

        if name.len() > MAX_NAME_LENGTH {
            return Err(GraphError::InvalidObject {
                reason: format!(
                    "{} name is too long ({} bytes). Maximum allowed: {} bytes",
                    kind,
                    name.len(),
                    MAX_NAME_LENGTH
                ),
            });
        }

        let display_name = if name.is_empty() { uid } else { name };

        Ok(Self {
            api_version: object.api_version.trim().to_string(),
            kind: kind.to_string(),
            name: display_name.to_string(),
            namespace: object
                .metadata
                .namespace
                .as_deref()
                .map(str::trim)
                .filter(|ns| !ns.is_empty())
                .map(str::to_string),
            uid: Some(uid).filter(|u| !u.is_empty()).map(str::to_string),
        })
    }

    /// Stable node key: the UID, or `<namespace>/<kind>/<name>` when the
    /// object carries no UID
    pub fn key(&self) -> NodeKey {
        match (&self.uid, &self.namespace) {
            (Some(uid), _) => NodeKey::new(uid.clone()),
            (None, Some(namespace)) => {
                NodeKey::new(format!("{}/{}/{}", namespace, self.kind, self.name))
            }
            (None, None) => NodeKey::new(format!("{}/{}", self.kind, self.name)),
        }
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }
}

/// Identity plus status summary of one observed object, as held by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDescriptor {
    identity: ObjectIdentity,
    summary: StatusSummary,
}

impl ObjectDescriptor {
    pub fn new(identity: ObjectIdentity, summary: StatusSummary) -> Self {
        Self { identity, summary }
    }

    pub fn identity(&self) -> &ObjectIdentity {
        &self.identity
    }

    pub fn summary(&self) -> &StatusSummary {
        &self.summary
    }

    pub fn key(&self) -> NodeKey {
        self.identity.key()
    }
}
