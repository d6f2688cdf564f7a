mod cli;
mod kubernetes;
mod report;
mod schedule;
mod types;
mod utils;

use clap::Parser;
use tracing::{error, info};

use cli::Cli;
use kubernetes::KubeSource;
use schedule::TokioSleeper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the report itself
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Kubernetes API client...");

    let source = match KubeSource::in_cluster() {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to create Kubernetes client: {:#}", e);
            std::process::exit(1);
        }
    };

    let settings = cli.settings();
    info!("Pod metadata from Downward API:");
    info!("  Pod Name: {}", settings.identity.pod_name);
    info!("  Pod Namespace: {}", settings.identity.pod_namespace);
    info!("  Node Name: {}", settings.identity.node_name);
    info!(
        "Listing pods in namespace '{}' every {} seconds",
        settings.target_namespace,
        settings.interval.as_secs()
    );

    let mut stdout = std::io::stdout();
    schedule::run(&source, &settings, &mut TokioSleeper, &mut stdout).await;
    Ok(())
}
