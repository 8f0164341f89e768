//! # survey-server
//!
//! axum HTTP API over `SurveyService`.
//!
//! ```text
//! POST /api/questions     create a question          201 | 500
//! GET  /api/questions     list the question bank     200 | 500
//! POST /api/surveys       create a survey            201 | 500
//! GET  /api/surveys/{id}  populated survey           200 | 404 | 500
//! ```
//!
//! Every request is handled independently; the only shared state is the
//! service handle in [`AppState`].

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::future::Future;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;

/// Serve the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "survey API listening");
    }
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolve when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
