//! Cluster administration operations
//!
//! One async method per remote operation. Each method builds a request path
//! from its identifiers, hands the recognized query options to the
//! transport, and returns the parsed response body untouched. No retries,
//! no status branching, no local state; a transport failure propagates as-is.

use serde_json::Value;
use std::sync::Arc;

use crate::params::{
    GetSettingsParams, HealthParams, NodeInfoParams, NodeStatsParams, PutSettingsParams,
    RerouteParams, StateParams, StatsParams, ShutdownParams,
};
use crate::transport::{Method, Transport};
use crate::Result;

/// Join path segments, skipping absent ones. Always leads with a slash.
fn make_path(segments: &[Option<&str>]) -> String {
    let mut path = String::new();
    for segment in segments.iter().flatten() {
        path.push('/');
        path.push_str(segment);
    }
    path
}

/// The cluster administration namespace
///
/// Obtained from [`Client::cluster`](crate::Client::cluster); shares the
/// parent client's transport.
#[derive(Clone)]
pub struct ClusterClient {
    transport: Arc<dyn Transport>,
}

impl ClusterClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Get a very simple status on the health of the cluster.
    ///
    /// `index` limits the information returned to a specific index.
    pub async fn health(&self, index: Option<&str>, params: &HealthParams) -> Result<Value> {
        let path = make_path(&[Some("_cluster"), Some("health"), index]);
        let (_, body) = self
            .transport
            .perform_request(Method::Get, &path, &params.to_query(), None)
            .await?;
        Ok(body)
    }

    /// List cluster-level changes (create index, update mapping, allocate or
    /// fail shard, ...) which have not yet been executed.
    pub async fn pending_tasks(&self) -> Result<Value> {
        let (_, body) = self
            .transport
            .perform_request(Method::Get, "/_cluster/pending_tasks", &[], None)
            .await?;
        Ok(body)
    }

    /// Get comprehensive state information of the whole cluster.
    ///
    /// `metric` limits the state to specific sections (`"blocks"`,
    /// `"metadata"`, `"nodes"`, `"routing_table"`, ...); `index` limits it to
    /// specific indices. Asking for an index without naming a metric implies
    /// all metrics, otherwise the index name would land in the metric slot.
    pub async fn state(
        &self,
        metric: Option<&str>,
        index: Option<&str>,
        params: &StateParams,
    ) -> Result<Value> {
        let metric = match (metric, index) {
            (None, Some(_)) => Some("_all"),
            (metric, _) => metric,
        };
        let path = make_path(&[Some("_cluster"), Some("state"), metric, index]);
        let (_, body) = self
            .transport
            .perform_request(Method::Get, &path, &params.to_query(), None)
            .await?;
        Ok(body)
    }

    /// Retrieve statistics from a cluster-wide perspective.
    ///
    /// With a `node_id` the request routes to the per-node variant of the
    /// stats endpoint; `"_local"` addresses the node answering the request.
    pub async fn stats(&self, node_id: Option<&str>, params: &StatsParams) -> Result<Value> {
        let path = match node_id {
            Some(node_id) => make_path(&[
                Some("_cluster"),
                Some("stats"),
                Some("nodes"),
                Some(node_id),
            ]),
            None => "/_cluster/stats".to_string(),
        };
        let (_, body) = self
            .transport
            .perform_request(Method::Get, &path, &params.to_query(), None)
            .await?;
        Ok(body)
    }

    /// Explicitly execute an allocation command (`move`, `cancel`,
    /// `allocate`). `body` carries the command definitions.
    pub async fn reroute(&self, body: Option<&Value>, params: &RerouteParams) -> Result<Value> {
        let (_, response) = self
            .transport
            .perform_request(Method::Post, "/_cluster/reroute", &params.to_query(), body)
            .await?;
        Ok(response)
    }

    /// Get cluster-wide settings.
    pub async fn get_settings(&self, params: &GetSettingsParams) -> Result<Value> {
        let (_, body) = self
            .transport
            .perform_request(Method::Get, "/_cluster/settings", &params.to_query(), None)
            .await?;
        Ok(body)
    }

    /// Update cluster-wide settings. `body` holds the settings under
    /// `transient` or `persistent` (the latter survives a cluster restart).
    pub async fn put_settings(&self, body: &Value, params: &PutSettingsParams) -> Result<Value> {
        let (_, response) = self
            .transport
            .perform_request(
                Method::Put,
                "/_cluster/settings",
                &params.to_query(),
                Some(body),
            )
            .await?;
        Ok(response)
    }

    /// Retrieve statistics for one, several or all nodes.
    ///
    /// `metric_family` selects a statistics group (`"indices"`, `"jvm"`,
    /// `"os"`, ...); `metric` narrows the `indices` family further
    /// (`"docs"`, `"search"`, `"store"`, ...). Naming a metric without its
    /// family implies all families, keeping the metric in its own path slot.
    pub async fn node_stats(
        &self,
        node_id: Option<&str>,
        metric_family: Option<&str>,
        metric: Option<&str>,
        params: &NodeStatsParams,
    ) -> Result<Value> {
        let metric_family = match (metric_family, metric) {
            (None, Some(_)) => Some("all"),
            (family, _) => family,
        };
        let path = make_path(&[Some("_nodes"), node_id, Some("stats"), metric_family, metric]);
        let (_, body) = self
            .transport
            .perform_request(Method::Get, &path, &params.to_query(), None)
            .await?;
        Ok(body)
    }

    /// Retrieve information about one, several or all nodes.
    ///
    /// `metric` selects the sections to return (`"settings"`, `"os"`,
    /// `"jvm"`, ...). A metric without a node_id addresses all nodes
    /// explicitly, otherwise the metric would land in the node_id slot.
    pub async fn node_info(
        &self,
        node_id: Option<&str>,
        metric: Option<&str>,
        params: &NodeInfoParams,
    ) -> Result<Value> {
        let node_id = match (node_id, metric) {
            (None, Some(_)) => Some("_all"),
            (node_id, _) => node_id,
        };
        let path = make_path(&[Some("_nodes"), node_id, metric]);
        let (_, body) = self
            .transport
            .perform_request(Method::Get, &path, &params.to_query(), None)
            .await?;
        Ok(body)
    }

    /// Shut down one, several or all nodes.
    pub async fn node_shutdown(
        &self,
        node_id: Option<&str>,
        params: &ShutdownParams,
    ) -> Result<Value> {
        let path = make_path(&[
            Some("_cluster"),
            Some("nodes"),
            node_id,
            Some("_shutdown"),
        ]);
        let (_, body) = self
            .transport
            .perform_request(Method::Post, &path, &params.to_query(), None)
            .await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{HealthLevel, HealthStatus};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct RecordedCall {
        method: Method,
        path: String,
        params: Vec<(&'static str, String)>,
        body: Option<Value>,
    }

    /// Transport stub that records every call and answers with a canned body
    struct RecordingTransport {
        calls: Mutex<Vec<RecordedCall>>,
        response: Value,
    }

    impl RecordingTransport {
        fn new(response: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response,
            })
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        fn single_call(&self) -> RecordedCall {
            let calls = self.calls();
            assert_eq!(calls.len(), 1, "expected exactly one transport call");
            calls.into_iter().next().unwrap()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn perform_request(
            &self,
            method: Method,
            path: &str,
            params: &[(&'static str, String)],
            body: Option<&Value>,
        ) -> Result<(u16, Value)> {
            self.calls.lock().unwrap().push(RecordedCall {
                method,
                path: path.to_string(),
                params: params.to_vec(),
                body: body.cloned(),
            });
            Ok((200, self.response.clone()))
        }
    }

    fn client() -> (Arc<RecordingTransport>, ClusterClient) {
        let transport = RecordingTransport::new(json!({"acknowledged": true}));
        let cluster = ClusterClient::new(transport.clone());
        (transport, cluster)
    }

    #[test]
    fn make_path_skips_absent_segments() {
        assert_eq!(
            make_path(&[Some("_cluster"), Some("health"), None]),
            "/_cluster/health"
        );
        assert_eq!(
            make_path(&[Some("_nodes"), None, Some("stats"), None, None]),
            "/_nodes/stats"
        );
        assert_eq!(
            make_path(&[Some("_cluster"), Some("state"), Some("_all"), Some("idx")]),
            "/_cluster/state/_all/idx"
        );
    }

    #[tokio::test]
    async fn health_base_path() {
        let (transport, cluster) = client();
        cluster.health(None, &HealthParams::default()).await.unwrap();
        let call = transport.single_call();
        assert_eq!(call.method, Method::Get);
        assert_eq!(call.path, "/_cluster/health");
        assert!(call.params.is_empty());
        assert!(call.body.is_none());
    }

    #[tokio::test]
    async fn health_with_index_and_options() {
        let (transport, cluster) = client();
        let params = HealthParams {
            level: Some(HealthLevel::Shards),
            wait_for_status: Some(HealthStatus::Green),
            timeout: Some("10s".to_string()),
            ..Default::default()
        };
        cluster.health(Some("logs-2026"), &params).await.unwrap();
        let call = transport.single_call();
        assert_eq!(call.path, "/_cluster/health/logs-2026");
        assert_eq!(
            call.params,
            vec![
                ("level", "shards".to_string()),
                ("timeout", "10s".to_string()),
                ("wait_for_status", "green".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn pending_tasks_path() {
        let (transport, cluster) = client();
        cluster.pending_tasks().await.unwrap();
        let call = transport.single_call();
        assert_eq!(call.method, Method::Get);
        assert_eq!(call.path, "/_cluster/pending_tasks");
        assert!(call.params.is_empty());
    }

    #[tokio::test]
    async fn state_base_path() {
        let (transport, cluster) = client();
        cluster
            .state(None, None, &StateParams::default())
            .await
            .unwrap();
        assert_eq!(transport.single_call().path, "/_cluster/state");
    }

    #[tokio::test]
    async fn state_index_without_metric_defaults_to_all() {
        let (transport, cluster) = client();
        cluster
            .state(None, Some("foo"), &StateParams::default())
            .await
            .unwrap();
        assert_eq!(transport.single_call().path, "/_cluster/state/_all/foo");
    }

    #[tokio::test]
    async fn state_with_explicit_metric() {
        let (transport, cluster) = client();
        cluster
            .state(Some("routing_table"), Some("foo"), &StateParams::default())
            .await
            .unwrap();
        assert_eq!(
            transport.single_call().path,
            "/_cluster/state/routing_table/foo"
        );
    }

    #[tokio::test]
    async fn stats_cluster_wide() {
        let (transport, cluster) = client();
        cluster.stats(None, &StatsParams::default()).await.unwrap();
        assert_eq!(transport.single_call().path, "/_cluster/stats");
    }

    #[tokio::test]
    async fn stats_routes_to_per_node_variant() {
        let (transport, cluster) = client();
        cluster
            .stats(Some("n1"), &StatsParams::default())
            .await
            .unwrap();
        assert_eq!(transport.single_call().path, "/_cluster/stats/nodes/n1");
    }

    #[tokio::test]
    async fn reroute_posts_command_body() {
        let (transport, cluster) = client();
        let commands = json!({
            "commands": [
                {"move": {"index": "foo", "shard": 0, "from_node": "n1", "to_node": "n2"}}
            ]
        });
        let params = RerouteParams {
            dry_run: Some(true),
            ..Default::default()
        };
        cluster.reroute(Some(&commands), &params).await.unwrap();
        let call = transport.single_call();
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.path, "/_cluster/reroute");
        assert_eq!(call.params, vec![("dry_run", "true".to_string())]);
        assert_eq!(call.body, Some(commands));
    }

    #[tokio::test]
    async fn settings_roundtrip_paths() {
        let (transport, cluster) = client();
        cluster
            .get_settings(&GetSettingsParams::default())
            .await
            .unwrap();
        let body = json!({"transient": {"cluster.routing.allocation.enable": "none"}});
        cluster
            .put_settings(&body, &PutSettingsParams::default())
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, Method::Get);
        assert_eq!(calls[0].path, "/_cluster/settings");
        assert_eq!(calls[1].method, Method::Put);
        assert_eq!(calls[1].path, "/_cluster/settings");
        assert_eq!(calls[1].body, Some(body));
    }

    #[tokio::test]
    async fn node_stats_base_path() {
        let (transport, cluster) = client();
        cluster
            .node_stats(None, None, None, &NodeStatsParams::default())
            .await
            .unwrap();
        assert_eq!(transport.single_call().path, "/_nodes/stats");
    }

    #[tokio::test]
    async fn node_stats_metric_without_family_defaults_to_all() {
        let (transport, cluster) = client();
        cluster
            .node_stats(None, None, Some("docs"), &NodeStatsParams::default())
            .await
            .unwrap();
        assert_eq!(transport.single_call().path, "/_nodes/stats/all/docs");
    }

    #[tokio::test]
    async fn node_stats_full_path() {
        let (transport, cluster) = client();
        let params = NodeStatsParams {
            fields: Some("title,body".to_string()),
        };
        cluster
            .node_stats(Some("n1,n2"), Some("indices"), Some("search"), &params)
            .await
            .unwrap();
        let call = transport.single_call();
        assert_eq!(call.path, "/_nodes/n1,n2/stats/indices/search");
        assert_eq!(call.params, vec![("fields", "title,body".to_string())]);
    }

    #[tokio::test]
    async fn node_info_base_path() {
        let (transport, cluster) = client();
        cluster
            .node_info(None, None, &NodeInfoParams::default())
            .await
            .unwrap();
        assert_eq!(transport.single_call().path, "/_nodes");
    }

    #[tokio::test]
    async fn node_info_metric_without_node_defaults_to_all_nodes() {
        let (transport, cluster) = client();
        cluster
            .node_info(None, Some("os"), &NodeInfoParams::default())
            .await
            .unwrap();
        assert_eq!(transport.single_call().path, "/_nodes/_all/os");
    }

    #[tokio::test]
    async fn node_shutdown_paths() {
        let (transport, cluster) = client();
        cluster
            .node_shutdown(None, &ShutdownParams::default())
            .await
            .unwrap();
        let params = ShutdownParams {
            delay: Some("5s".to_string()),
            exit: Some(false),
        };
        cluster.node_shutdown(Some("n1"), &params).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].method, Method::Post);
        assert_eq!(calls[0].path, "/_cluster/nodes/_shutdown");
        assert_eq!(calls[1].path, "/_cluster/nodes/n1/_shutdown");
        assert_eq!(
            calls[1].params,
            vec![("delay", "5s".to_string()), ("exit", "false".to_string())]
        );
    }

    #[tokio::test]
    async fn response_body_passes_through_unchanged() {
        let transport = RecordingTransport::new(json!({
            "cluster_name": "prod",
            "status": "yellow",
            "number_of_nodes": 3
        }));
        let cluster = ClusterClient::new(transport.clone());
        let body = cluster
            .health(None, &HealthParams::default())
            .await
            .unwrap();
        assert_eq!(body["status"], "yellow");
        assert_eq!(body["number_of_nodes"], 3);
    }
}
