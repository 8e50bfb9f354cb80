use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw resource object as observed from the cluster
///
/// Only the envelope (apiVersion, kind, metadata) is typed; `spec` and
/// `status` stay as free-form JSON so that any kind can be ingested and
/// the per-kind status rules pick out the fields they understand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceObject {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub spec: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub status: Value,
}

/// Object metadata subset needed to identify and relate objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub uid: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner_references: Vec<OwnerReference>,
}

/// Reference from an object to the object that owns it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<bool>,
}

impl ResourceObject {
    pub fn new(api_version: &str, kind: &str, name: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
            metadata: ObjectMeta {
                name: name.to_string(),
                ..ObjectMeta::default()
            },
            spec: Value::Null,
            status: Value::Null,
        }
    }

    pub fn with_uid(mut self, uid: &str) -> Self {
        self.metadata.uid = uid.to_string();
        self
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.metadata.namespace = Some(namespace.to_string());
        self
    }

    pub fn with_spec(mut self, spec: Value) -> Self {
        self.spec = spec;
        self
    }

    pub fn with_status(mut self, status: Value) -> Self {
        self.status = status;
        self
    }

    /// Adds a controller owner reference pointing at `owner`
    pub fn owned_by(mut self, owner: &ResourceObject) -> Self {
        self.metadata.owner_references.push(OwnerReference {
            api_version: owner.api_version.clone(),
            kind: owner.kind.clone(),
            name: owner.metadata.name.clone(),
            uid: owner.metadata.uid.clone(),
            controller: Some(true),
        });
        self
    }

    /// Integer field under `spec`, addressed with a JSON pointer (e.g. "/replicas")
    pub fn spec_int(&self, pointer: &str) -> Option<i64> {
        self.spec.pointer(pointer).and_then(Value::as_i64)
    }

    /// Integer field under `status`, addressed with a JSON pointer
    pub fn status_int(&self, pointer: &str) -> Option<i64> {
        self.status.pointer(pointer).and_then(Value::as_i64)
    }

    /// String field under `status`, addressed with a JSON pointer
    pub fn status_str(&self, pointer: &str) -> Option<&str> {
        self.status.pointer(pointer).and_then(Value::as_str)
    }

    pub fn has_status(&self) -> bool {
        match &self.status {
            Value::Null => false,
            Value::Object(map) => !map.is_empty(),
            _ => true,
        }
    }
}
