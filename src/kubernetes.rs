use anyhow::Context;
use k8s_openapi::api::core::v1::{Namespace, Node, Pod};
use kube::{Api, Client, api::ListParams, config};
use tracing::debug;

/// Read-only inventory queries made once per cycle.
///
/// The reporter only needs plain lists, so anything that can hand back
/// k8s-openapi objects (a live cluster, a canned fixture) can drive it.
pub trait ClusterSource {
    async fn list_nodes(&self) -> anyhow::Result<Vec<Node>>;
    async fn list_namespaces(&self) -> anyhow::Result<Vec<Namespace>>;
    async fn list_pods(&self, namespace: &str) -> anyhow::Result<Vec<Pod>>;
}

/// Live cluster access through the in-cluster service account.
#[derive(Clone)]
pub struct KubeSource {
    client: Client,
}

impl KubeSource {
    /// Build a client from the service account token and CA mounted into the pod.
    ///
    /// There is no kubeconfig fallback: outside a pod this fails.
    pub fn in_cluster() -> anyhow::Result<Self> {
        let config =
            config::Config::incluster().context("failed to get in-cluster config")?;
        debug!("In-cluster API endpoint: {}", config.cluster_url);
        let client = Client::try_from(config).context("failed to create client")?;
        Ok(Self { client })
    }
}

impl ClusterSource for KubeSource {
    async fn list_nodes(&self) -> anyhow::Result<Vec<Node>> {
        let api: Api<Node> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .context("failed to list nodes")?;
        Ok(list.items)
    }

    async fn list_namespaces(&self) -> anyhow::Result<Vec<Namespace>> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .context("failed to list namespaces")?;
        Ok(list.items)
    }

    async fn list_pods(&self, namespace: &str) -> anyhow::Result<Vec<Pod>> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&ListParams::default())
            .await
            .context("failed to list pods")?;
        Ok(list.items)
    }
}
