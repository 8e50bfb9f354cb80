use crate::ports::outbound::{ResourceCatalog, ResourceDescription};
use crate::resource_graph::domain::ObjectIdentity;

/// Root of every navigable path produced by the catalog
const PATH_PREFIX: &str = "/overview";

/// Query appended to object paths so the detail page opens on its summary
const SUMMARY_QUERY: &str = "view=summary";

/// (apiVersion, kind, object title, list title, section path)
const BUILTIN_RESOURCES: &[(&str, &str, &str, &str, &str)] = &[
    ("batch/v1beta1", "CronJob", "Cron Job", "Workloads / Cron Jobs", "/workloads/cron-jobs"),
    ("apps/v1", "DaemonSet", "Daemon Set", "Workloads / Daemon Sets", "/workloads/daemon-sets"),
    ("apps/v1", "Deployment", "Deployment", "Workloads / Deployments", "/workloads/deployments"),
    ("batch/v1", "Job", "Job", "Workloads / Jobs", "/workloads/jobs"),
    ("v1", "Pod", "Pod", "Workloads / Pods", "/workloads/pods"),
    ("apps/v1", "ReplicaSet", "Replica Set", "Workloads / Replica Sets", "/workloads/replica-sets"),
    (
        "v1",
        "ReplicationController",
        "Replication Controller",
        "Workloads / Replication Controllers",
        "/workloads/replication-controllers",
    ),
    ("apps/v1", "StatefulSet", "Stateful Set", "Workloads / Stateful Sets", "/workloads/stateful-sets"),
    (
        "extensions/v1beta1",
        "Ingress",
        "Ingress",
        "Discovery & Load Balancing / Ingresses",
        "/discovery-and-load-balancing/ingresses",
    ),
    (
        "v1",
        "Service",
        "Service",
        "Discovery & Load Balancing / Services",
        "/discovery-and-load-balancing/services",
    ),
    ("v1", "ConfigMap", "Config Map", "Config & Storage / Config Maps", "/config-and-storage/config-maps"),
    (
        "v1",
        "PersistentVolumeClaim",
        "Persistent Volume Claim",
        "Config & Storage / Persistent Volume Claims",
        "/config-and-storage/persistent-volume-claims",
    ),
    ("v1", "Secret", "Secret", "Config & Storage / Secrets", "/config-and-storage/secrets"),
    (
        "v1",
        "ServiceAccount",
        "Service Account",
        "Config & Storage / Service Accounts",
        "/config-and-storage/service-accounts",
    ),
    ("rbac.authorization.k8s.io/v1", "Role", "Role", "RBAC / Roles", "/rbac/roles"),
    (
        "rbac.authorization.k8s.io/v1",
        "RoleBinding",
        "Role Binding",
        "RBAC / Role Bindings",
        "/rbac/role-bindings",
    ),
];

/// KubernetesCatalog adapter describing the built-in cluster resource kinds
///
/// Lookups match the exact (apiVersion, kind) pair first and fall back to
/// the kind alone, so objects served under an older API group (such as a
/// ReplicaSet from `extensions/v1beta1`) still resolve to their entry.
#[derive(Debug, Clone)]
pub struct KubernetesCatalog {
    resources: Vec<ResourceDescription>,
}

impl KubernetesCatalog {
    pub fn new() -> Self {
        let resources = BUILTIN_RESOURCES
            .iter()
            .map(|(api_version, kind, title, list_title, path)| ResourceDescription {
                api_version: api_version.to_string(),
                kind: kind.to_string(),
                title: title.to_string(),
                list_title: list_title.to_string(),
                path: path.to_string(),
            })
            .collect();
        Self { resources }
    }

    /// Creates a catalog with no entries
    pub fn empty() -> Self {
        Self {
            resources: Vec::new(),
        }
    }

    /// Registers an additional resource, replacing any entry for the same
    /// (apiVersion, kind) pair
    pub fn with_resource(mut self, description: ResourceDescription) -> Self {
        self.resources.retain(|existing| {
            !(existing.api_version == description.api_version && existing.kind == description.kind)
        });
        self.resources.push(description);
        self
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl Default for KubernetesCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceCatalog for KubernetesCatalog {
    fn describe(&self, api_version: &str, kind: &str) -> Option<&ResourceDescription> {
        self.resources
            .iter()
            .find(|r| r.api_version == api_version && r.kind == kind)
            .or_else(|| {
                self.resources
                    .iter()
                    .find(|r| r.kind.eq_ignore_ascii_case(kind))
            })
    }

    fn path_for(&self, identity: &ObjectIdentity) -> Option<String> {
        let description = self.describe(identity.api_version(), identity.kind())?;
        let name = urlencoding::encode(identity.name());

        let path = match identity.namespace() {
            Some(namespace) => format!(
                "{}/namespace/{}{}/{}?{}",
                PATH_PREFIX,
                urlencoding::encode(namespace),
                description.path,
                name,
                SUMMARY_QUERY
            ),
            None => format!(
                "{}{}/{}?{}",
                PATH_PREFIX, description.path, name, SUMMARY_QUERY
            ),
        };
        Some(path)
    }
}
