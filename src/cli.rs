use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::time::Duration;

use crate::report::Highlight;
use crate::types::Identity;

pub const DEFAULT_TARGET_NAMESPACE: &str = "default";

#[derive(Parser)]
#[command(name = "cluster-info-reporter")]
#[command(about = "Periodically report cluster nodes, namespaces and pods, highlighting this pod")]
pub struct Cli {
    /// Name of this pod (Downward API)
    #[arg(long, env = "POD_NAME", default_value = "")]
    pub pod_name: String,

    /// Namespace of this pod (Downward API)
    #[arg(long, env = "POD_NAMESPACE", default_value = "")]
    pub pod_namespace: String,

    /// Node this pod is scheduled on (Downward API)
    #[arg(long, env = "NODE_NAME", default_value = "")]
    pub node_name: String,

    /// Namespace whose pods are listed
    #[arg(short = 'n', long, env = "TARGET_NAMESPACE", default_value = DEFAULT_TARGET_NAMESPACE)]
    pub target_namespace: String,

    /// Seconds to wait between updates
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Stop after this many updates (runs forever if unset)
    #[arg(long, env = "REPORT_CYCLES", value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,

    /// When to highlight our own entries (NO_COLOR in the environment blanks the highlight)
    #[arg(long, env = "REPORT_COLOR", value_enum, default_value_t = ColorMode::Always)]
    pub color: ColorMode,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Always,
    Never,
    /// Only when stdout is a terminal
    Auto,
}

/// Everything a polling run needs, fixed at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub identity: Identity,
    pub target_namespace: String,
    pub interval: Duration,
    pub cycles: Option<u64>,
    pub highlight: Highlight,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        // An exported-but-empty TARGET_NAMESPACE still means the default namespace
        let target_namespace = if self.target_namespace.is_empty() {
            DEFAULT_TARGET_NAMESPACE.to_string()
        } else {
            self.target_namespace.clone()
        };

        let highlight = match self.color {
            ColorMode::Always => Highlight::Ansi,
            ColorMode::Never => Highlight::Plain,
            ColorMode::Auto if std::io::stdout().is_terminal() => Highlight::Ansi,
            ColorMode::Auto => Highlight::Plain,
        };

        Settings {
            identity: Identity {
                pod_name: self.pod_name.clone(),
                pod_namespace: self.pod_namespace.clone(),
                node_name: self.node_name.clone(),
            },
            target_namespace,
            interval: Duration::from_secs(self.interval),
            cycles: self.cycles,
            highlight,
        }
    }
}
