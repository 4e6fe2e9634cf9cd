//! seaward - Async client for Elasticsearch-style cluster administration
//!
//! This crate binds the administrative REST API of an Elasticsearch-style
//! search cluster as typed async method calls. Each method assembles a
//! request path and query string from its arguments, issues exactly one HTTP
//! request through a shared [`Transport`], and returns the parsed response
//! body unchanged.
//!
//! # Operations
//!
//! All cluster administration endpoints live on [`ClusterClient`]:
//!
//! - `/_cluster/health` - Cluster health
//! - `/_cluster/pending_tasks` - Queued cluster-level changes
//! - `/_cluster/state` - Full cluster state
//! - `/_cluster/stats` - Cluster-wide statistics
//! - `/_cluster/reroute` - Explicit shard allocation commands
//! - `/_cluster/settings` - Settings get/update
//! - `/_nodes/{id}/stats` - Per-node statistics
//! - `/_nodes/{id}` - Per-node information
//! - `/_cluster/nodes/{id}/_shutdown` - Node shutdown
//!
//! # Example
//!
//! ```no_run
//! use seaward::{Client, HealthParams, TransportConfig};
//!
//! # async fn run() -> seaward::Result<()> {
//! let client = Client::new(TransportConfig::default())?;
//! let health = client.cluster().health(None, &HealthParams::default()).await?;
//! println!("status: {}", health["status"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Transport
//!
//! Connection handling, node selection, retries and load balancing are the
//! transport's concern. The default [`HttpTransport`] is a thin reqwest
//! wrapper that performs no retries; any alternative can be injected through
//! [`Client::with_transport`], which is also the seam tests use.

pub mod cluster;
pub mod config;
pub mod error;
pub mod params;
pub mod transport;

mod client;

pub use client::Client;
pub use cluster::ClusterClient;
pub use config::{AuthMethod, TransportConfig};
pub use error::ClientError;
pub use params::{
    GetSettingsParams, HealthLevel, HealthParams, HealthStatus, NodeInfoParams, NodeStatsParams,
    PutSettingsParams, RerouteParams, StateParams, StatsParams, ShutdownParams,
};
pub use transport::{HttpTransport, Method, Transport};

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
