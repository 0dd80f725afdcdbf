use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::any;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::handler::handle;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.network.body_limit_bytes;

    Router::new()
        .route("/", any(handle))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Serve until `cancel` fires, then drain in-flight requests
pub async fn serve(state: Arc<AppState>, cancel: CancellationToken) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&state.config.network.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
