//! The `build` subcommand: shows the request an endpoint resolves to without sending it.

use anyhow::{Context, Result};
use serde::Serialize;

use super::EndpointArgs;
use crate::output::{print_value, OutputFormat};

#[derive(Serialize)]
struct BuiltRequest {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

pub fn run(args: &EndpointArgs, format: &OutputFormat) -> Result<()> {
    let built = describe(args)?;
    print_value(&serde_json::to_value(built)?, format);
    Ok(())
}

fn describe(args: &EndpointArgs) -> Result<BuiltRequest> {
    let endpoint = args.to_endpoint()?;
    let request = apidispatch::build(&endpoint)
        .with_context(|| format!("cannot build a request for {}", args.url))?;
    Ok(BuiltRequest {
        method: request.method.to_string(),
        url: request.url.to_string(),
        headers: request.headers,
        body: request
            .body
            .map(|b| String::from_utf8_lossy(&b).into_owned()),
    })
}
