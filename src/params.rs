//! Per-operation query options
//!
//! Every operation recognizes a fixed set of query options; that whitelist
//! is enforced here at the type level. An option a struct has no field for
//! cannot reach the transport at all. Unset fields produce no query pair.
//!
//! Timeouts and comma-separated lists stay strings because the server
//! defines their grammar (`"30s"`, `"node-1,node-2"`); options with a
//! server-defined closed set get an enum.

use std::fmt;

/// Detail level for the health operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLevel {
    Cluster,
    Indices,
    Shards,
}

impl fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthLevel::Cluster => write!(f, "cluster"),
            HealthLevel::Indices => write!(f, "indices"),
            HealthLevel::Shards => write!(f, "shards"),
        }
    }
}

/// Cluster health status, as used by `wait_for_status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Green => write!(f, "green"),
            HealthStatus::Yellow => write!(f, "yellow"),
            HealthStatus::Red => write!(f, "red"),
        }
    }
}

fn push<T: fmt::Display>(
    out: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: &Option<T>,
) {
    if let Some(value) = value {
        out.push((key, value.to_string()));
    }
}

/// Options for [`ClusterClient::health`](crate::ClusterClient::health)
#[derive(Debug, Clone, Default)]
pub struct HealthParams {
    /// Detail level for the returned information (default: cluster)
    pub level: Option<HealthLevel>,
    /// Return local information instead of asking the master node
    pub local: Option<bool>,
    /// Timeout for the connection to the master node, e.g. `"30s"`
    pub master_timeout: Option<String>,
    /// Overall operation timeout
    pub timeout: Option<String>,
    /// Block until this many shards are active
    pub wait_for_active_shards: Option<u32>,
    /// Block until this many nodes are available; accepts `">=N"` forms
    pub wait_for_nodes: Option<String>,
    /// Block until at most this many shards are relocating
    pub wait_for_relocating_shards: Option<u32>,
    /// Block until the cluster reaches this status
    pub wait_for_status: Option<HealthStatus>,
}

impl HealthParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "level", &self.level);
        push(&mut out, "local", &self.local);
        push(&mut out, "master_timeout", &self.master_timeout);
        push(&mut out, "timeout", &self.timeout);
        push(&mut out, "wait_for_active_shards", &self.wait_for_active_shards);
        push(&mut out, "wait_for_nodes", &self.wait_for_nodes);
        push(
            &mut out,
            "wait_for_relocating_shards",
            &self.wait_for_relocating_shards,
        );
        push(&mut out, "wait_for_status", &self.wait_for_status);
        out
    }
}

/// Options for [`ClusterClient::state`](crate::ClusterClient::state)
#[derive(Debug, Clone, Default)]
pub struct StateParams {
    pub local: Option<bool>,
    pub master_timeout: Option<String>,
    /// Return settings in flat (dotted-key) format
    pub flat_settings: Option<bool>,
}

impl StateParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "local", &self.local);
        push(&mut out, "master_timeout", &self.master_timeout);
        push(&mut out, "flat_settings", &self.flat_settings);
        out
    }
}

/// Options for [`ClusterClient::stats`](crate::ClusterClient::stats)
#[derive(Debug, Clone, Default)]
pub struct StatsParams {
    pub flat_settings: Option<bool>,
    /// Render time and byte values human-readable
    pub human: Option<bool>,
}

impl StatsParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "flat_settings", &self.flat_settings);
        push(&mut out, "human", &self.human);
        out
    }
}

/// Options for [`ClusterClient::reroute`](crate::ClusterClient::reroute)
#[derive(Debug, Clone, Default)]
pub struct RerouteParams {
    /// Simulate only; return the resulting state without applying it
    pub dry_run: Option<bool>,
    /// Omit cluster state metadata from the response
    pub filter_metadata: Option<bool>,
    pub master_timeout: Option<String>,
    pub timeout: Option<String>,
}

impl RerouteParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "dry_run", &self.dry_run);
        push(&mut out, "filter_metadata", &self.filter_metadata);
        push(&mut out, "master_timeout", &self.master_timeout);
        push(&mut out, "timeout", &self.timeout);
        out
    }
}

/// Options for [`ClusterClient::get_settings`](crate::ClusterClient::get_settings)
#[derive(Debug, Clone, Default)]
pub struct GetSettingsParams {
    pub flat_settings: Option<bool>,
    pub master_timeout: Option<String>,
    pub timeout: Option<String>,
}

impl GetSettingsParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "flat_settings", &self.flat_settings);
        push(&mut out, "master_timeout", &self.master_timeout);
        push(&mut out, "timeout", &self.timeout);
        out
    }
}

/// Options for [`ClusterClient::put_settings`](crate::ClusterClient::put_settings)
#[derive(Debug, Clone, Default)]
pub struct PutSettingsParams {
    pub flat_settings: Option<bool>,
}

impl PutSettingsParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "flat_settings", &self.flat_settings);
        out
    }
}

/// Options for [`ClusterClient::node_stats`](crate::ClusterClient::node_stats)
#[derive(Debug, Clone, Default)]
pub struct NodeStatsParams {
    /// Comma-separated field list for the `indices` family, wildcards allowed
    pub fields: Option<String>,
}

impl NodeStatsParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "fields", &self.fields);
        out
    }
}

/// Options for [`ClusterClient::node_info`](crate::ClusterClient::node_info)
#[derive(Debug, Clone, Default)]
pub struct NodeInfoParams {
    pub flat_settings: Option<bool>,
}

impl NodeInfoParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "flat_settings", &self.flat_settings);
        out
    }
}

/// Options for [`ClusterClient::node_shutdown`](crate::ClusterClient::node_shutdown)
#[derive(Debug, Clone, Default)]
pub struct ShutdownParams {
    /// Delay before the shutdown takes effect (default on the server: 1s)
    pub delay: Option<String>,
    /// Also exit the server process
    pub exit: Option<bool>,
}

impl ShutdownParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "delay", &self.delay);
        push(&mut out, "exit", &self.exit);
        out
    }
}
