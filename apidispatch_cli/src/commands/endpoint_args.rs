//! Flags shared by every subcommand that describes an endpoint.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use apidispatch::{Encoding, EndpointDescriptor, Method};
use clap::Args;
use serde_json::Value;

#[derive(Args)]
pub struct EndpointArgs {
    /// HTTP method: GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS
    pub method: String,

    /// Absolute URL (e.g. https://api.coingecko.com/api/v3/ping)
    pub url: String,

    /// Request header as name:value (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Parameter as key=value; values that parse as JSON are sent as JSON (repeatable)
    #[arg(short = 'p', long = "param")]
    pub params: Vec<String>,

    /// Send parameters as a JSON body instead of the query string
    #[arg(long)]
    pub json_body: bool,
}

impl EndpointArgs {
    /// Assembles the endpoint. Query pairs already in the URL come first,
    /// followed by `--param` values in the order given.
    pub fn to_endpoint(&self) -> Result<EndpointDescriptor> {
        let method = Method::from_str(&self.method)
            .map_err(|_| anyhow!("unsupported HTTP method: {}", self.method))?;
        let mut endpoint = EndpointDescriptor::parse(method, &self.url)
            .with_context(|| format!("invalid URL: {}", self.url))?;

        for raw in &self.headers {
            let (name, value) = parse_header(raw)?;
            endpoint = endpoint.with_header(name, value);
        }
        for raw in &self.params {
            let (key, value) = parse_param(raw)?;
            endpoint = endpoint.with_parameter(key, value);
        }
        if self.json_body {
            endpoint = endpoint.with_encoding(Encoding::JsonBody);
        }
        Ok(endpoint)
    }
}

fn parse_header(raw: &str) -> Result<(&str, &str)> {
    let Some((name, value)) = raw.split_once(':') else {
        bail!("header must be name:value, got {:?}", raw);
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("header name is empty in {:?}", raw);
    }
    Ok((name, value.trim()))
}

fn parse_param(raw: &str) -> Result<(&str, Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("parameter must be key=value, got {:?}", raw);
    };
    if key.is_empty() {
        bail!("parameter key is empty in {:?}", raw);
    }
    let value = serde_json::from_str::<Value>(value)
        .unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key, value))
}
