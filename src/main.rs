mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use resource_viewer::adapters::outbound::catalog::KubernetesCatalog;
use resource_viewer::adapters::outbound::console::StderrProgressReporter;
use resource_viewer::adapters::outbound::filesystem::FileSystemReader;
use resource_viewer::application::dto::{OutputFormat, ViewRequest};
use resource_viewer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use resource_viewer::application::use_cases::BuildViewUseCase;
use resource_viewer::ports::outbound::ProgressReporter;
use resource_viewer::resource_graph::domain::NodeStatus;
use resource_viewer::resource_graph::policies::AggregationPolicy;
use resource_viewer::shared::error::ExitCode;
use resource_viewer::shared::Result;
use std::io::IsTerminal;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "resource_viewer=debug"
    } else {
        "resource_viewer=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let policy = build_policy(&args, config.as_ref());
    let format = resolve_format(&args, config.as_ref());
    let fail_on = args
        .fail_on
        .or_else(|| config.as_ref().and_then(ConfigFile::fail_on_status));

    let use_case = BuildViewUseCase::new(
        FileSystemReader::new(),
        StderrProgressReporter::new(),
        Arc::new(KubernetesCatalog::new()),
    );
    let request = ViewRequest::new(args.input.clone(), args.root.clone())
        .with_namespace(args.namespace.clone())
        .with_policy(policy);
    let response = use_case.execute(request)?;

    let reporter = StderrProgressReporter::new();
    reporter.report(FormatterFactory::progress_message(format));

    let colored = !args.no_color && args.output.is_none() && std::io::stdout().is_terminal();
    let output = FormatterFactory::create(format, colored).format(&response.view)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&output)?;

    let worst = response.view.worst_status();
    reporter.report_completion(&format!(
        "✅ Rendered {} node(s) from {} object(s); worst status: {}",
        response.view.nodes().len(),
        response.object_count,
        worst
    ));

    Ok(exit_code_for(worst, fail_on))
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

/// CLI flags override config values, which override the defaults.
fn build_policy(args: &Args, config: Option<&ConfigFile>) -> AggregationPolicy {
    let mut policy = AggregationPolicy::default();

    if let Some(depth) = args
        .individual_depth
        .or_else(|| config.and_then(|c| c.individual_depth))
    {
        policy = policy.with_individual_depth(depth);
    }

    if !args.aggregate_kinds.is_empty() {
        policy = policy.with_aggregate_kinds(&args.aggregate_kinds);
    } else if let Some(kinds) = config.and_then(|c| c.aggregate_kinds.as_ref()) {
        policy = policy.with_aggregate_kinds(kinds);
    }

    if let Some(edge) = args
        .aggregate_edge
        .or_else(|| config.and_then(ConfigFile::aggregate_edge_type))
    {
        policy = policy.with_aggregate_edge(edge);
    }

    policy
}

fn resolve_format(args: &Args, config: Option<&ConfigFile>) -> OutputFormat {
    args.format
        .or_else(|| config.and_then(ConfigFile::output_format))
        .unwrap_or_default()
}

fn exit_code_for(worst: NodeStatus, fail_on: Option<NodeStatus>) -> ExitCode {
    match fail_on {
        Some(threshold) if worst >= threshold => ExitCode::UnhealthyResources,
        _ => ExitCode::Success,
    }
}
