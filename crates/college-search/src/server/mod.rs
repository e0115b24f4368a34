//! HTTP server for college search and inaccuracy reports.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::client::CollegeScorecardClient;
use crate::report::ReportMailer;

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: CollegeScorecardClient,
    pub mailer: Arc<dyn ReportMailer>,
}

impl AppState {
    /// Create handler state.
    #[must_use]
    pub fn new(client: CollegeScorecardClient, mailer: Arc<dyn ReportMailer>) -> Self {
        Self { client, mailer }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").field("client", &self.client).finish_non_exhaustive()
    }
}

/// College search HTTP server.
#[derive(Debug)]
pub struct CollegeServer {
    state: AppState,
}

impl CollegeServer {
    /// Create a new server.
    #[must_use]
    pub fn new(client: CollegeScorecardClient, mailer: Arc<dyn ReportMailer>) -> Self {
        Self { state: AppState::new(client, mailer) }
    }

    /// Serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run(self, port: u16) -> anyhow::Result<()> {
        let router = routes::create_router(self.state);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
