//! Daemon entry point for the member-roster MCP server.
//!
//! Loads configuration from arguments and the environment, then serves the
//! member query tools over stdio, streamable HTTP, or both.

mod config;

use std::sync::Arc;

use roster_core::MemberDirectory;
use roster_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::config::RosterConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // stdout carries the stdio transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = RosterConfig::from_args()?;
    let directory = Arc::new(MemberDirectory::new(config.csv_path.clone()));

    if config.http_serve {
        let http_config =
            McpHttpServerConfig::new(config.http_addr).with_stateful_mode(config.http_stateful);
        let http = serve_streamable_http(Arc::clone(&directory), http_config);
        if !config.enable_stdio {
            return http.await;
        }
        tokio::spawn(async move {
            if let Err(err) = http.await {
                error!("MCP HTTP server stopped: {err}");
            }
        });
    }

    serve_stdio(directory).await
}
