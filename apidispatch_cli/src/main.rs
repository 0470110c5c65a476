mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "apidispatch")]
#[command(about = "Describe an HTTP API call, send it, and print the decoded JSON")]
struct Cli {
    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a request and print the decoded response
    Call(Box<commands::call::CallArgs>),
    /// Print the request an endpoint resolves to, without sending it
    Build(commands::EndpointArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("apidispatch=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    match &cli.command {
        Commands::Call(args) => commands::call::run(args.as_ref(), &format).await?,
        Commands::Build(args) => commands::build::run(args, &format)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn call_accepts_repeated_headers_and_params() {
        let cli = Cli::try_parse_from([
            "apidispatch",
            "--output",
            "json",
            "call",
            "GET",
            "https://api.coingecko.com/api/v3/simple/price",
            "-H",
            "accept: application/json",
            "-p",
            "ids=bitcoin",
            "-p",
            "vs_currencies=usd",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert_eq!(OutputFormat::parse(&cli.output), OutputFormat::Json);
        match cli.command {
            Commands::Call(args) => {
                assert_eq!(args.endpoint.headers.len(), 1);
                assert_eq!(args.endpoint.params, vec!["ids=bitcoin", "vs_currencies=usd"]);
                assert_eq!(args.timeout, Some(5));
            }
            Commands::Build(_) => panic!("expected call"),
        }
    }
}
