use crate::resource_graph::domain::ViewGraph;
use crate::shared::Result;

/// ViewFormatter port for rendering a view graph as text
///
/// This port abstracts the output format (JSON document, indented tree, etc.).
pub trait ViewFormatter {
    /// Formats the view graph
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &ViewGraph) -> Result<String>;
}
