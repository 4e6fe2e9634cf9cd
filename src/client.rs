//! Root client holding the shared transport

use std::sync::Arc;

use crate::cluster::ClusterClient;
use crate::config::TransportConfig;
use crate::transport::{HttpTransport, Transport};
use crate::Result;

/// Entry point: owns the transport, hands out API namespaces
///
/// Cloning is cheap; clones share the underlying transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Connect via the default HTTP transport
    pub fn new(config: TransportConfig) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
        })
    }

    /// Use a caller-provided transport (custom routing, test stubs)
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The cluster administration namespace
    pub fn cluster(&self) -> ClusterClient {
        ClusterClient::new(self.transport.clone())
    }
}
