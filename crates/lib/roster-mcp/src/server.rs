//! MCP server runners for member-roster.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use roster_core::MemberDirectory;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use tracing::info;

use crate::RosterMcp;

/// Address and session mode for the streamable HTTP transport.
///
/// Keep-alive and retry timing use rmcp's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McpHttpServerConfig {
    pub addr: SocketAddr,
    pub stateful_mode: bool,
}

impl McpHttpServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            stateful_mode: true,
        }
    }

    #[must_use]
    pub const fn with_stateful_mode(mut self, stateful_mode: bool) -> Self {
        self.stateful_mode = stateful_mode;
        self
    }
}

/// Serves the MCP server over stdio.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(
    directory: Arc<MemberDirectory>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(path = %directory.path().display(), "member-roster serving MCP over stdio");
    let service = RosterMcp::with_directory(directory);
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout)).await?;
    let _ = running.waiting().await?;
    Ok(())
}

/// Builds the HTTP router: member tools under `/mcp`, a liveness probe at `/health`.
pub fn member_router(directory: Arc<MemberDirectory>, config: McpHttpServerConfig) -> Router {
    let service: StreamableHttpService<RosterMcp, LocalSessionManager> =
        StreamableHttpService::new(
            move || Ok(RosterMcp::with_directory(Arc::clone(&directory))),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                stateful_mode: config.stateful_mode,
                ..Default::default()
            },
        );

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", service)
}

/// Serves the member tools over streamable HTTP until the listener fails.
///
/// # Errors
/// Returns any listener or server error.
pub async fn serve_streamable_http(
    directory: Arc<MemberDirectory>,
    config: McpHttpServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let path = directory.path().display().to_string();
    let app = member_router(directory, config);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(
        %path,
        stateful = config.stateful_mode,
        "member-roster MCP listening on http://{}/mcp",
        config.addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_defaults_to_stateful_sessions() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 4020));
        let config = McpHttpServerConfig::new(addr);
        assert!(config.stateful_mode);

        let stateless = config.with_stateful_mode(false);
        assert_eq!(stateless.addr, addr);
        assert!(!stateless.stateful_mode);
    }

    #[tokio::test]
    async fn router_answers_health_checks() {
        use axum::body::Body;
        use axum::http::{Request, StatusCode};
        use tower::ServiceExt;

        let directory = Arc::new(MemberDirectory::new("members.csv"));
        let config = McpHttpServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        let response = member_router(directory, config)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
