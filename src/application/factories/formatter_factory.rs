use crate::adapters::outbound::formatters::{JsonFormatter, TreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ViewFormatter;

/// Factory for creating view formatters
///
/// Selects the formatter adapter for an output format. Colour is a property
/// of the destination, so the caller decides whether tree output is coloured.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// # Examples
    /// ```
    /// use resource_viewer::application::dto::OutputFormat;
    /// use resource_viewer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Tree, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn ViewFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Tree => Box::new(TreeFormatter::new(colored)),
        }
    }

    /// Progress message shown before formatting
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON view document...",
            OutputFormat::Tree => "📝 Generating ownership tree...",
        }
    }
}
