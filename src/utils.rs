use k8s_openapi::api::core::v1::{Namespace, Node, NodeCondition, Pod};
use kube::ResourceExt;

use crate::types::{NamespaceEntry, NodeEntry, PodEntry, Readiness};

/// Scan conditions in order; the first `Ready=True` wins.
pub fn node_readiness(conditions: &[NodeCondition]) -> Readiness {
    if conditions
        .iter()
        .any(|c| c.type_ == "Ready" && c.status == "True")
    {
        Readiness::Ready
    } else {
        Readiness::NotReady
    }
}

pub fn node_entry(node: &Node) -> NodeEntry {
    let status = node.status.as_ref();
    let kubelet_version = status
        .and_then(|s| s.node_info.as_ref())
        .map(|info| info.kubelet_version.clone())
        .unwrap_or_default();
    let readiness = status
        .and_then(|s| s.conditions.as_deref())
        .map(node_readiness)
        .unwrap_or(Readiness::NotReady);

    NodeEntry {
        name: node.name_any(),
        kubelet_version,
        readiness,
    }
}

pub fn namespace_entry(ns: &Namespace) -> NamespaceEntry {
    NamespaceEntry {
        name: ns.name_any(),
        phase: ns
            .status
            .as_ref()
            .and_then(|s| s.phase.clone())
            .unwrap_or_default(),
    }
}

/// `queried_namespace` fills in for pods whose metadata omits the namespace.
pub fn pod_entry(pod: &Pod, queried_namespace: &str) -> PodEntry {
    PodEntry {
        name: pod.name_any(),
        namespace: pod
            .namespace()
            .unwrap_or_else(|| queried_namespace.to_string()),
        phase: pod
            .status
            .as_ref()
            .and_then(|s| s.phase.clone())
            .unwrap_or_default(),
    }
}
