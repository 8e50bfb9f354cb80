use super::*;
use crate::adapters::outbound::catalog::KubernetesCatalog;
use crate::resource_graph::domain::{EdgeType, NodeStatus};
use crate::resource_graph::policies::AggregationPolicy;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

// Mock implementations for testing
struct MockManifestReader {
    content: String,
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _path: &Path) -> Result<String> {
        Ok(self.content.clone())
    }
}

struct FailingManifestReader;

impl ManifestReader for FailingManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        Err(ViewerError::ManifestNotFound {
            path: path.to_path_buf(),
            suggestion: "missing".to_string(),
        }
        .into())
    }
}

#[derive(Default)]
struct RecordingProgressReporter {
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

const DEPLOYMENT_MANIFEST: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
  namespace: default
  uid: deploy-1
spec:
  replicas: 2
status:
  replicas: 2
  availableReplicas: 1
---
apiVersion: apps/v1
kind: ReplicaSet
metadata:
  name: web-1
  namespace: default
  uid: rs-1
  ownerReferences:
    - apiVersion: apps/v1
      kind: Deployment
      name: web
      uid: deploy-1
spec:
  replicas: 2
status:
  availableReplicas: 2
---
apiVersion: v1
kind: Pod
metadata:
  name: web-1-a
  namespace: default
  uid: pod-a
  ownerReferences:
    - apiVersion: apps/v1
      kind: ReplicaSet
      name: web-1
      uid: rs-1
status:
  phase: Running
---
apiVersion: v1
kind: Pod
metadata:
  name: web-1-b
  namespace: default
  uid: pod-b
  ownerReferences:
    - apiVersion: apps/v1
      kind: ReplicaSet
      name: web-1
      uid: rs-1
status:
  phase: Pending
"#;

fn use_case(content: &str) -> BuildViewUseCase<MockManifestReader, RecordingProgressReporter> {
    BuildViewUseCase::new(
        MockManifestReader {
            content: content.to_string(),
        },
        RecordingProgressReporter::default(),
        Arc::new(KubernetesCatalog::new()),
    )
}

fn request(root: &str) -> ViewRequest {
    ViewRequest::new(PathBuf::from("objects.yaml"), root)
}

#[test]
fn test_execute_builds_view_from_owner_references() {
    let response = use_case(DEPLOYMENT_MANIFEST).execute(request("deploy-1")).unwrap();
    let view = &response.view;

    assert_eq!(response.object_count, 4);
    assert_eq!(response.dangling_owner_refs, 0);
    assert_eq!(view.selected().as_str(), "deploy-1");
    assert_eq!(view.nodes().len(), 3);

    let deployment = view.node("deploy-1").unwrap();
    assert_eq!(deployment.status, NodeStatus::Warning);
    assert_eq!(deployment.detail, "Deployment is not ready (1/2)");

    let pods = view.node("pods-rs-1").unwrap();
    assert_eq!(pods.name, "web-1 pods");
    assert_eq!(pods.detail, "Pod count: 2");
    assert_eq!(pods.status, NodeStatus::Warning);
    assert!(pods.path.is_none());

    let aggregate_edge = view
        .edges()
        .iter()
        .find(|edge| edge.target.as_str() == "pods-rs-1")
        .unwrap();
    assert_eq!(aggregate_edge.edge_type, EdgeType::Implicit);
}

#[test]
fn test_execute_resolves_kind_name_root() {
    let response = use_case(DEPLOYMENT_MANIFEST)
        .execute(request("ReplicaSet/web-1"))
        .unwrap();

    assert_eq!(response.root_key.as_str(), "rs-1");
    assert_eq!(response.view.nodes().len(), 2);
}

#[test]
fn test_execute_kind_name_root_respects_namespace() {
    let result = use_case(DEPLOYMENT_MANIFEST)
        .execute(request("Deployment/web").with_namespace(Some("other".to_string())));

    let err_string = format!("{}", result.unwrap_err());
    assert!(err_string.contains("Root object not found: Deployment/web"));
}

#[test]
fn test_execute_unknown_root() {
    let result = use_case(DEPLOYMENT_MANIFEST).execute(request("missing"));
    assert!(result.is_err());
}

#[test]
fn test_execute_applies_policy() {
    let policy = AggregationPolicy::default()
        .with_individual_depth(2)
        .with_aggregate_kinds(Vec::<String>::new());

    let response = use_case(DEPLOYMENT_MANIFEST)
        .execute(request("deploy-1").with_policy(policy))
        .unwrap();

    assert!(response.view.node("pod-a").is_some());
    assert!(response.view.node("pod-b").is_some());
    assert!(response.view.node("pods-rs-1").is_none());
}

#[test]
fn test_execute_counts_dangling_owner_references() {
    let manifest = r#"
apiVersion: v1
kind: Pod
metadata:
  name: orphan
  uid: pod-1
  ownerReferences:
    - apiVersion: apps/v1
      kind: ReplicaSet
      name: gone
      uid: rs-gone
"#;
    let use_case = use_case(manifest);
    let response = use_case.execute(request("pod-1")).unwrap();

    assert_eq!(response.dangling_owner_refs, 1);
    assert_eq!(response.view.nodes().len(), 1);
    assert!(use_case
        .progress_reporter
        .errors
        .borrow()
        .iter()
        .any(|message| message.contains("missing from the manifest")));
}

#[test]
fn test_execute_self_owner_reference_keeps_sibling_edges() {
    let manifest = r#"
apiVersion: apps/v1
kind: ReplicaSet
metadata:
  name: api
  uid: rs
  ownerReferences:
    - apiVersion: apps/v1
      kind: ReplicaSet
      name: api
      uid: rs
---
apiVersion: v1
kind: Pod
metadata:
  name: api-1
  uid: p1
  ownerReferences:
    - apiVersion: apps/v1
      kind: ReplicaSet
      name: api
      uid: rs
---
apiVersion: v1
kind: Pod
metadata:
  name: api-2
  uid: p2
  ownerReferences:
    - apiVersion: apps/v1
      kind: ReplicaSet
      name: api
      uid: rs
"#;
    let use_case = use_case(manifest);
    let response = use_case.execute(request("rs")).unwrap();

    assert_eq!(response.dangling_owner_refs, 1);
    assert_eq!(response.view.nodes().len(), 2);
    assert_eq!(response.view.node("pods-rs").unwrap().detail, "Pod count: 2");
    assert_eq!(response.view.edges().len(), 1);
    assert!(use_case
        .progress_reporter
        .errors
        .borrow()
        .iter()
        .any(|message| message.contains("rs lists itself as its owner")));
}

#[test]
fn test_execute_skips_invalid_objects() {
    let manifest = r#"[
        {"apiVersion": "v1", "metadata": {"name": "no-kind"}},
        {"apiVersion": "v1", "kind": "ConfigMap", "metadata": {"name": "settings", "uid": "cm-1"}}
    ]"#;
    let use_case = use_case(manifest);
    let response = use_case.execute(request("cm-1")).unwrap();

    assert_eq!(response.object_count, 1);
    assert_eq!(use_case.progress_reporter.errors.borrow().len(), 1);
}

#[test]
fn test_execute_parse_error() {
    let result = use_case("{ broken").execute(request("x"));

    let err_string = format!("{}", result.unwrap_err());
    assert!(err_string.contains("Failed to parse manifest file"));
}

#[test]
fn test_execute_reader_error_propagates() {
    let use_case = BuildViewUseCase::new(
        FailingManifestReader,
        RecordingProgressReporter::default(),
        Arc::new(KubernetesCatalog::new()),
    );

    let err_string = format!("{}", use_case.execute(request("x")).unwrap_err());
    assert!(err_string.contains("Manifest file not found"));
}
