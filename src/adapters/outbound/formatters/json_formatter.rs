use crate::ports::outbound::ViewFormatter;
use crate::resource_graph::domain::{Edge, Node, NodeKey, ViewGraph};
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Title carried by every rendered resource viewer document
const VIEWER_TITLE: &str = "Resource Viewer";

#[derive(Debug, Serialize)]
struct ViewerDocument<'a> {
    title: &'static str,
    selected: &'a NodeKey,
    nodes: &'a BTreeMap<NodeKey, Node>,
    edges: &'a [Edge],
}

/// JsonFormatter adapter producing the viewer document consumed by the UI
///
/// Nodes are keyed by node key and emitted in key order, so identical
/// views always serialize to identical bytes.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsonFormatter {
    fn format(&self, view: &ViewGraph) -> Result<String> {
        let document = ViewerDocument {
            title: VIEWER_TITLE,
            selected: view.selected(),
            nodes: view.nodes(),
            edges: view.edges(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
        .map_err(|e| anyhow::anyhow!("Failed to serialize view to JSON: {}", e))?;

        Ok(json)
    }
}
