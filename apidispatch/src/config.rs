//! Settings for the reqwest-backed transport.

use std::time::Duration;

/// Environment variable holding the request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "APIDISPATCH_TIMEOUT_SECS";
/// Environment variable overriding the `user-agent` header.
pub const USER_AGENT_ENV: &str = "APIDISPATCH_USER_AGENT";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client-level settings applied to every request a
/// [`ReqwestTransport`](crate::ReqwestTransport) sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// Sent with every request, before the endpoint's own headers.
    pub default_headers: Vec<(String, String)>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
            default_headers: Vec::new(),
        }
    }
}

impl TransportConfig {
    /// Reads overrides from the process environment. Missing or unparsable
    /// values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!("Ignoring invalid {}={:?}", TIMEOUT_ENV, raw),
            }
        }
        if let Some(agent) = lookup(USER_AGENT_ENV).filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }
        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_default_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_string(), value.to_string()));
        self
    }
}

fn default_user_agent() -> String {
    format!("apidispatch/{}", env!("CARGO_PKG_VERSION"))
}
