//! Server host - a plain HTTP listener that sends every request to the adapter.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tracing::info;

use super::handler::{AppState, handle_request};
use super::helpers::HttpReply;

impl IntoResponse for HttpReply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(CONTENT_TYPE, self.content_type())], self.body_string()).into_response()
    }
}

/// There is no path routing: any path reaches the adapter.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new().fallback(handle_inbound).with_state(state)
}

async fn handle_inbound(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    handle_request(&state, &body).await.into_response()
}

/// Serves the adapter until ctrl-c, then waits for in-flight replies.
///
/// # Errors
///
/// Returns an error if the address is invalid, binding fails or the server stops unexpectedly.
pub async fn run_server(state: Arc<AppState>, bind: &str) -> Result<()> {
    let bind_addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid BIND_ADDR '{bind}': expected host:port"))?;

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind on {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve listen address")?;
    info!(%local_addr, "Listening for Slack events");

    let app = build_router(state.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("server exited unexpectedly")?;

    state.executor.drain().await;
    Ok(())
}
