//! [`Transport`] backed by `reqwest`.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::{Transport, TransportError, TransportOutcome, TransportResponse};
use crate::{config::TransportConfig, request::TransportRequest};

/// Sends requests through one shared `reqwest::Client`.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds the HTTP client from `config`.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut defaults = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                tracing::error!("Invalid default header name {}: {}", name, e);
                TransportError::new(format!("invalid header name {:?}", name))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                tracing::error!("Invalid default header value for {}: {}", name, e);
                TransportError::new(format!("invalid header value for {}", name))
            })?;
            defaults.append(name, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .default_headers(defaults)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                TransportError::new(e.to_string())
            })?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> TransportOutcome {
        let mut builder = self
            .client
            .request(request.method.into(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            TransportError::new(e.to_string())
        })?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = match resp.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                tracing::error!("Failed to read response body: {}", e);
                None
            }
        };

        Ok(TransportResponse {
            status: Some(status),
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        assert!(ReqwestTransport::new(&TransportConfig::default()).is_ok());
    }

    #[test]
    fn rejects_malformed_default_headers() {
        let config = TransportConfig::default().with_default_header("bad header", "x");
        let err = ReqwestTransport::new(&config).unwrap_err();
        assert!(err.message.contains("bad header"));
    }
}
