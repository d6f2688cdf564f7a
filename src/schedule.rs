use std::io::Write;
use std::time::Duration;
use tracing::{error, info};

use crate::cli::Settings;
use crate::kubernetes::ClusterSource;
use crate::report::{report_namespaces, report_nodes, report_pods};

/// Suspends the polling loop between cycles.
pub trait Sleeper {
    async fn sleep(&mut self, duration: Duration);
}

pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// One pass over nodes, namespaces and pods.
///
/// A failed section is logged and skipped; the remaining sections still run.
pub async fn run_cycle<S: ClusterSource>(source: &S, settings: &Settings, out: &mut impl Write) {
    info!("=== Kubernetes API Information ===");

    if let Err(e) = report_nodes(source, settings, out).await {
        error!("Error getting cluster info: {:#}", e);
    }
    blank_line(out);

    if let Err(e) = report_namespaces(source, settings, out).await {
        error!("Error listing namespaces: {:#}", e);
    }
    blank_line(out);

    if let Err(e) = report_pods(source, settings, out).await {
        error!("Error listing pods: {:#}", e);
    }
    if let Err(e) = out.flush() {
        error!("Failed to flush output: {}", e);
    }

    info!("=== End of Information ===");
}

fn blank_line(out: &mut impl Write) {
    if let Err(e) = writeln!(out) {
        error!("Failed to write output: {}", e);
    }
}

/// Poll forever, or for `settings.cycles` cycles when set.
///
/// Returns the number of cycles completed.
pub async fn run<S, T, W>(source: &S, settings: &Settings, sleeper: &mut T, out: &mut W) -> u64
where
    S: ClusterSource,
    T: Sleeper,
    W: Write,
{
    let mut completed = 0u64;
    loop {
        run_cycle(source, settings, out).await;
        completed += 1;

        if settings.cycles.is_some_and(|limit| completed >= limit) {
            info!("Completed {} updates, exiting", completed);
            return completed;
        }

        info!(
            "Waiting {} seconds before next update...",
            settings.interval.as_secs()
        );
        sleeper.sleep(settings.interval).await;
    }
}
