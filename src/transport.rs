//! The transport seam between operation methods and the wire
//!
//! Operation methods never touch HTTP directly; they hand a verb, a path,
//! query pairs and an optional body to a [`Transport`]. The default
//! [`HttpTransport`] is a thin reqwest wrapper. Anything smarter (retries,
//! node selection, sniffing) belongs in an alternative implementation
//! injected through [`crate::Client::with_transport`].

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::config::{AuthMethod, TransportConfig};
use crate::error::ClientError;
use crate::Result;

/// HTTP verbs used by the administration surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// A single request/response exchange with the cluster
///
/// `params` are pre-validated by the per-operation option structs and pass
/// through to the query string without further interpretation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform_request(
        &self,
        method: Method,
        path: &str,
        params: &[(&'static str, String)],
        body: Option<&Value>,
    ) -> Result<(u16, Value)>;
}

/// Default transport: one reqwest client, one request per call, no retries
pub struct HttpTransport {
    client: Client,
    base_url: String,
    auth_header: Option<String>,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Result<Self> {
        // Fail on a malformed base URL now rather than on the first request
        url::Url::parse(&config.base_url)?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header: auth_header(&config.auth),
        })
    }
}

fn auth_header(auth: &AuthMethod) -> Option<String> {
    match auth {
        AuthMethod::None => None,
        AuthMethod::Basic { username, password } => {
            let credentials = BASE64.encode(format!("{}:{}", username, password));
            Some(format!("Basic {}", credentials))
        }
        AuthMethod::ApiKey { key } => Some(format!("ApiKey {}", key)),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform_request(
        &self,
        method: Method,
        path: &str,
        params: &[(&'static str, String)],
        body: Option<&Value>,
    ) -> Result<(u16, Value)> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {} params={:?}", method, url, params);

        let mut request = self.client.request(method.into(), &url).query(params);
        if let Some(header) = &self.auth_header {
            request = request.header(reqwest::header::AUTHORIZATION, header.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let parsed = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok((status.as_u16(), parsed))
    }
}
