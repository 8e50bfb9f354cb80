/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, resource registry).
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod resource_catalog;
pub mod view_formatter;

pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use resource_catalog::{ResourceCatalog, ResourceDescription};
pub use view_formatter::ViewFormatter;
