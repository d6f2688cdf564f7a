use std::fmt;

/// Who we are, as injected through the Downward API.
///
/// Empty strings stand for "unset" and are compared literally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub pod_name: String,
    pub pod_namespace: String,
    pub node_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotReady,
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readiness::Ready => f.write_str("Ready"),
            Readiness::NotReady => f.write_str("NotReady"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEntry {
    pub name: String,
    pub kubelet_version: String,
    pub readiness: Readiness,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEntry {
    pub name: String,
    pub phase: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodEntry {
    pub name: String,
    pub namespace: String,
    pub phase: String,
}

impl NodeEntry {
    pub fn is_self(&self, identity: &Identity) -> bool {
        self.name == identity.node_name
    }
}

impl NamespaceEntry {
    pub fn is_self(&self, identity: &Identity) -> bool {
        self.name == identity.pod_namespace
    }
}

impl PodEntry {
    pub fn is_self(&self, identity: &Identity) -> bool {
        self.name == identity.pod_name && self.namespace == identity.pod_namespace
    }
}
