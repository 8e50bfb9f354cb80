use clap::Parser;
use std::path::PathBuf;

use crate::config::parse_threshold;
use resource_viewer::application::dto::OutputFormat;
use resource_viewer::resource_graph::domain::{EdgeType, NodeStatus};

/// Render the ownership graph of cluster resources with health status
#[derive(Parser, Debug)]
#[command(name = "resource-viewer")]
#[command(version)]
#[command(
    about = "Render the ownership graph of cluster resources with health status",
    long_about = None
)]
pub struct Args {
    /// Manifest with the observed objects (JSON, JSON list, or multi-document YAML)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Root object: a UID or Kind/name (e.g. Deployment/web)
    #[arg(short, long, value_name = "ROOT")]
    pub root: String,

    /// Namespace used to resolve a Kind/name root
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Output format: json or tree
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./resource-viewer.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Depth below the root down to which children are shown individually
    #[arg(long, value_name = "DEPTH")]
    pub individual_depth: Option<usize>,

    /// Kind that is always aggregated. Can be specified multiple times
    #[arg(long = "aggregate-kind", value_name = "KIND")]
    pub aggregate_kinds: Vec<String>,

    /// Edge type connecting a parent to its aggregate nodes: explicit or implicit
    #[arg(long, value_name = "TYPE")]
    pub aggregate_edge: Option<EdgeType>,

    /// Exit with code 1 when any node is at or above this status: warning or error
    #[arg(long, value_name = "STATUS", value_parser = parse_threshold)]
    pub fail_on: Option<NodeStatus>,

    /// Disable colored tree output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
