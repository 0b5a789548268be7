//! yfinance-mcp: Yahoo Finance tools for MCP clients over stdio.
//!
//! ```bash
//! yfinance-mcp
//! yfinance-mcp --timeout 60 --verbose
//! ```

use std::time::Duration;

use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use yfinance_mcp::{YahooFinanceServer, YfClient};

/// Yahoo Finance MCP server
#[derive(Parser, Debug)]
#[command(name = "yfinance-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Overall HTTP request timeout in seconds
    #[arg(long, env = "YFINANCE_MCP_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// HTTP connect timeout in seconds
    #[arg(long, env = "YFINANCE_MCP_CONNECT_TIMEOUT", default_value_t = 10)]
    connect_timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "yfinance_mcp=debug,rmcp=debug"
    } else {
        "yfinance_mcp=info,rmcp=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout carries the protocol
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = YfClient::builder()
        .timeout(Duration::from_secs(args.timeout))
        .connect_timeout(Duration::from_secs(args.connect_timeout))
        .build()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        timeout = args.timeout,
        "starting Yahoo Finance MCP server on stdio"
    );

    let service = YahooFinanceServer::new(client).serve(stdio()).await?;
    service.waiting().await?;

    tracing::info!("server stopped");
    Ok(())
}
