use anyhow::Context;
use crossterm::style::Stylize;
use std::io::Write;
use tracing::debug;

use crate::cli::Settings;
use crate::kubernetes::ClusterSource;
use crate::types::{Identity, NamespaceEntry, NodeEntry, PodEntry};
use crate::utils::{namespace_entry, node_entry, pod_entry};

const MY_NODE: &str = "<- MY NODE";
const MY_NAMESPACE: &str = "<- MY NAMESPACE";
const THIS_IS_ME: &str = "<- THIS IS ME!";

/// How self entries are decorated on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Wrap self entries in the standard yellow ANSI escape.
    Ansi,
    Plain,
}

/// One formatted entry. Text never contains escape codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub is_self: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<Line>,
}

impl Highlight {
    pub fn render(self, line: &Line) -> String {
        match self {
            Highlight::Ansi if line.is_self => line.text.as_str().dark_yellow().to_string(),
            _ => line.text.clone(),
        }
    }
}

impl Section {
    pub fn write_to(&self, out: &mut impl Write, highlight: Highlight) -> std::io::Result<()> {
        writeln!(out, "{}", self.title)?;
        for line in &self.lines {
            writeln!(out, "{}", highlight.render(line))?;
        }
        Ok(())
    }
}

fn line(text: String, is_self: bool, marker: &str) -> Line {
    if is_self {
        Line {
            text: format!("{} {}", text, marker),
            is_self,
        }
    } else {
        Line { text, is_self }
    }
}

pub fn node_section(nodes: &[NodeEntry], identity: &Identity) -> Section {
    Section {
        title: format!("Cluster has {} nodes:", nodes.len()),
        lines: nodes
            .iter()
            .map(|n| {
                line(
                    format!("- {} ({}, {})", n.name, n.kubelet_version, n.readiness),
                    n.is_self(identity),
                    MY_NODE,
                )
            })
            .collect(),
    }
}

pub fn namespace_section(namespaces: &[NamespaceEntry], identity: &Identity) -> Section {
    Section {
        title: format!("Found {} namespaces:", namespaces.len()),
        lines: namespaces
            .iter()
            .map(|ns| {
                line(
                    format!("- {} (Phase: {})", ns.name, ns.phase),
                    ns.is_self(identity),
                    MY_NAMESPACE,
                )
            })
            .collect(),
    }
}

pub fn pod_section(pods: &[PodEntry], namespace: &str, identity: &Identity) -> Section {
    Section {
        title: format!("Found {} pods in namespace '{}':", pods.len(), namespace),
        lines: pods
            .iter()
            .map(|p| {
                line(
                    format!("- {} (Phase: {})", p.name, p.phase),
                    p.is_self(identity),
                    THIS_IS_ME,
                )
            })
            .collect(),
    }
}

pub async fn report_nodes<S: ClusterSource>(
    source: &S,
    settings: &Settings,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let nodes: Vec<NodeEntry> = source.list_nodes().await?.iter().map(node_entry).collect();
    debug!("Fetched {} nodes", nodes.len());
    node_section(&nodes, &settings.identity)
        .write_to(out, settings.highlight)
        .context("failed to write node list")
}

pub async fn report_namespaces<S: ClusterSource>(
    source: &S,
    settings: &Settings,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let namespaces: Vec<NamespaceEntry> = source
        .list_namespaces()
        .await?
        .iter()
        .map(namespace_entry)
        .collect();
    debug!("Fetched {} namespaces", namespaces.len());
    namespace_section(&namespaces, &settings.identity)
        .write_to(out, settings.highlight)
        .context("failed to write namespace list")
}

pub async fn report_pods<S: ClusterSource>(
    source: &S,
    settings: &Settings,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let ns = settings.target_namespace.as_str();
    let pods: Vec<PodEntry> = source
        .list_pods(ns)
        .await?
        .iter()
        .map(|p| pod_entry(p, ns))
        .collect();
    debug!("Fetched {} pods in namespace {}", pods.len(), ns);
    pod_section(&pods, ns, &settings.identity)
        .write_to(out, settings.highlight)
        .context("failed to write pod list")
}
