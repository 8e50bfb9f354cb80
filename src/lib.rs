//! resource-viewer - ownership graphs of cluster resources with health status
//!
//! This library ingests observed resource objects and parent→child
//! ownership declarations, keeps them in a concurrency-safe relationship
//! store, and renders immutable view graphs rooted at a chosen object, with
//! high-cardinality children folded into aggregate nodes. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resource_graph`): graph model, status and aggregation policies, store
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use resource_viewer::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let use_case = BuildViewUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     Arc::new(KubernetesCatalog::new()),
//! );
//!
//! let request = ViewRequest::new(PathBuf::from("objects.yaml"), "Deployment/web");
//! let response = use_case.execute(request)?;
//!
//! let output = JsonFormatter::new().format(&response.view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod manifest;
pub mod ports;
pub mod resource_graph;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::KubernetesCatalog;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TreeFormatter};
    pub use crate::application::dto::{OutputFormat, ViewRequest, ViewResponse};
    pub use crate::application::use_cases::BuildViewUseCase;
    pub use crate::manifest::parse_manifest;
    pub use crate::ports::outbound::{
        ManifestReader, OutputPresenter, ProgressReporter, ResourceCatalog, ResourceDescription,
        ViewFormatter,
    };
    pub use crate::resource_graph::domain::{
        Edge, EdgeType, GraphError, Node, NodeKey, NodeStatus, ObjectIdentity, OwnerReference,
        ResourceObject, StatusSummary, ViewGraph,
    };
    pub use crate::resource_graph::policies::{AggregationPolicy, KindStatus};
    pub use crate::resource_graph::services::{RelationshipStore, StatusEvaluator};
    pub use crate::shared::Result;
}
