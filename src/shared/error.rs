use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI jobs to tell an unhealthy view apart
/// from a usage mistake or a failure to build the view at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// View rendered and nothing reached the `--fail-on` threshold
    Success = 0,
    /// A node in the view is at or above the `--fail-on` threshold
    UnhealthyResources = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable manifest, unknown root, write failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnhealthyResources => write!(f, "Unhealthy Resources (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for building resource views.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Manifest file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse manifest file: {path}\nDetails: {details}\n\n💡 Hint: The manifest must contain JSON or YAML resource objects")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Root object not found: {root}\n\n💡 Hint: Pass an object UID or Kind/name (e.g. Deployment/web)")]
    RootNotResolved { root: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
