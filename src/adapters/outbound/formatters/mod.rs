/// Formatter adapters for the supported view output formats
mod json_formatter;
mod tree_formatter;

pub use json_formatter::JsonFormatter;
pub use tree_formatter::TreeFormatter;
