//! The `call` subcommand: dispatches one endpoint and prints the decoded JSON.

use std::time::Duration;

use anyhow::{Context, Result};
use apidispatch::{Dispatcher, ReqwestTransport, TransportConfig};
use clap::Args;
use serde_json::Value;

use super::EndpointArgs;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct CallArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Request timeout in seconds (overrides APIDISPATCH_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User-agent header (overrides APIDISPATCH_USER_AGENT)
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl CallArgs {
    fn transport_config(&self) -> TransportConfig {
        let mut config = TransportConfig::from_env();
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &self.user_agent {
            config = config.with_user_agent(agent);
        }
        config
    }
}

pub async fn run(args: &CallArgs, format: &OutputFormat) -> Result<()> {
    let endpoint = args.endpoint.to_endpoint()?;
    let transport = ReqwestTransport::new(&args.transport_config())
        .context("failed to set up HTTP transport")?;
    let dispatcher = Dispatcher::new(transport);

    tracing::info!("{} {}://{}{}", endpoint.method, endpoint.scheme, endpoint.host, endpoint.path);
    let value: Value = dispatcher
        .dispatch(&endpoint)
        .await
        .with_context(|| format!("{} {} failed", endpoint.method, args.endpoint.url))?;

    print_value(&value, format);
    Ok(())
}
