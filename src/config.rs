//! Configuration file support for resource-viewer.
//!
//! Provides YAML-based configuration through `resource-viewer.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use resource_viewer::application::dto::OutputFormat;
use resource_viewer::resource_graph::domain::{EdgeType, NodeStatus};
use resource_viewer::shared::Result;

pub const CONFIG_FILENAME: &str = "resource-viewer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub individual_depth: Option<usize>,
    pub aggregate_kinds: Option<Vec<String>>,
    pub aggregate_edge: Option<String>,
    pub fail_on: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| OutputFormat::from_str(f).ok())
    }

    pub fn aggregate_edge_type(&self) -> Option<EdgeType> {
        self.aggregate_edge
            .as_deref()
            .and_then(|e| EdgeType::from_str(e).ok())
    }

    pub fn fail_on_status(&self) -> Option<NodeStatus> {
        self.fail_on.as_deref().and_then(|s| parse_threshold(s).ok())
    }
}

/// Parses a `fail_on` threshold; only `warning` and `error` are meaningful.
pub fn parse_threshold(value: &str) -> std::result::Result<NodeStatus, String> {
    match NodeStatus::from_str(value)? {
        status @ (NodeStatus::Warning | NodeStatus::Error) => Ok(status),
        other => Err(format!(
            "Invalid threshold: {}. Please specify 'warning' or 'error'",
            other
        )),
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to nothing rather than to an empty mapping.
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "config loaded");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: format. {}", e);
        }
    }

    if let Some(ref kinds) = config.aggregate_kinds {
        for (i, kind) in kinds.iter().enumerate() {
            if kind.trim().is_empty() {
                bail!(
                    "Invalid config: aggregate_kinds[{}] must not be empty.\n\n\
                     💡 Hint: List resource kinds by name (e.g., \"Pod\").",
                    i
                );
            }
        }
    }

    if let Some(ref edge) = config.aggregate_edge {
        if let Err(e) = EdgeType::from_str(edge) {
            bail!("Invalid config: aggregate_edge. {}", e);
        }
    }

    if let Some(ref fail_on) = config.fail_on {
        if let Err(e) = parse_threshold(fail_on) {
            bail!("Invalid config: fail_on. {}", e);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
