mod input;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pkg_constants::cluster::DEFAULT_NAMESPACE;
use pkg_constants::paths::DEFAULT_CONFIG;
use pkg_metrics::MetricLabels;
use pkg_models::{Dependencies, Service, ServiceList};
use pkg_types::bundle::{MeshDetails, ServiceDetails, ServiceListDetails};
use pkg_types::config::{ConfigFile, load_config_file};
use pkg_types::validate::{NameKind, validate_name};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "meshlens",
    about = "Service views from cluster state, mesh config and request metrics"
)]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, global = true, default_value = DEFAULT_CONFIG)]
    config: String,

    /// Namespace the bundles belong to
    #[arg(long, short, global = true)]
    namespace: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Pretty-print the rendered view
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the service overview list of a namespace
    List {
        /// JSON file with `services` and `deployments`
        #[arg(long)]
        cluster: PathBuf,
        /// Request-count query result (vector) used to fill traffic counters
        #[arg(long)]
        metrics: Option<PathBuf>,
    },
    /// Render the detailed view of one service
    Detail {
        /// Service name
        #[arg(long, short)]
        service: String,
        /// JSON file with `service`, `endpoints`, `deployments` and `autoscalers`
        #[arg(long)]
        cluster: PathBuf,
        /// JSON file with `routeRules` and `destinationPolicies`
        #[arg(long)]
        mesh: Option<PathBuf>,
        /// JSON map of version label to caller list
        #[arg(long)]
        dependencies: Option<PathBuf>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Merge: config file > defaults
fn metric_labels(file_cfg: &ConfigFile) -> MetricLabels {
    let defaults = MetricLabels::default();
    MetricLabels {
        source: file_cfg.source_label.clone().unwrap_or(defaults.source),
        destination: file_cfg
            .destination_label
            .clone()
            .unwrap_or(defaults.destination),
        response_code: file_cfg
            .response_code_label
            .clone()
            .unwrap_or(defaults.response_code),
        error_status_threshold: file_cfg
            .error_status_threshold
            .unwrap_or(defaults.error_status_threshold),
    }
}

fn render<T: Serialize>(view: &T, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(view)?
    } else {
        serde_json::to_string(view)?
    };
    Ok(out)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: ConfigFile = load_config_file(&cli.config)
        .with_context(|| format!("failed to load config file {}", cli.config))?;
    init_tracing(cli.log_json || file_cfg.log_json.unwrap_or(false));
    info!("Config file: {}", cli.config);

    // Merge: CLI args > config file > defaults
    let namespace = cli
        .namespace
        .clone()
        .or_else(|| file_cfg.namespace.clone())
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    validate_name(NameKind::Namespace, &namespace)?;
    let labels = metric_labels(&file_cfg);

    let output = match cli.command {
        Commands::List { cluster, metrics } => {
            let (details, vector) = tokio::try_join!(
                input::read_json::<ServiceListDetails>(&cluster),
                input::read_metrics(metrics.as_deref()),
            )?;

            let mut list = ServiceList::from_details(&namespace, &details);
            if let Some(vector) = vector {
                info!(
                    "Processing {} samples for {} services",
                    vector.len(),
                    list.services.len()
                );
                list.process_request_counters(&vector, &labels);
            }
            info!("Namespace {}: {} services", namespace, list.services.len());
            render(&list, cli.pretty)?
        }
        Commands::Detail {
            service,
            cluster,
            mesh,
            dependencies,
        } => {
            validate_name(NameKind::Service, &service)?;
            let (details, mesh, dependencies) = tokio::try_join!(
                input::read_json::<ServiceDetails>(&cluster),
                input::read_json_or_default::<MeshDetails>(mesh.as_deref()),
                input::read_json_or_default::<Dependencies>(dependencies.as_deref()),
            )?;

            let view =
                Service::new(&service, &namespace).with_details(&details, &mesh, dependencies);
            info!(
                "Service {}/{}: {} deployments, {} route rules",
                namespace,
                service,
                view.deployments.len(),
                view.route_rules.len()
            );
            render(&view, cli.pretty)?
        }
    };

    println!("{}", output);
    Ok(())
}
