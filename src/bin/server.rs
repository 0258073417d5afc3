//! Harvest MCP server binary.
//!
//! Reads credentials from the environment, constructs the concrete Harvest
//! client, and serves the tool surface over the stdio transport. A missing
//! credential terminates the process before any tool is registered.

use clap::Parser;
use harvest_mcp::harvest::{HarvestClient, HarvestConfig};
use harvest_mcp::mcp::HarvestServer;
use miette::IntoDiagnostic;
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "harvest-mcp")]
#[command(author, version, about = "Harvest MCP server over stdio", long_about = None)]
struct Cli {
    /// Override the Harvest API base URL (takes precedence over HARVEST_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // stdout carries the MCP transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let _ = rustls::crypto::ring::default_provider().install_default();

    let mut config = HarvestConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = Some(base_url);
    }

    let client = HarvestClient::new(config)?;
    info!(base_url = client.base_url(), "starting Harvest MCP server on stdio");

    let service = HarvestServer::new(client)
        .serve(rmcp::transport::io::stdio())
        .await
        .into_diagnostic()?;
    service.waiting().await.into_diagnostic()?;

    Ok(())
}
