//! Optional axum receiver for MaaP webhook callbacks.
//!
//! The gateway retries callbacks that do not get a 2xx, so the receiver
//! acknowledges every request with `200 ok` and only logs dispatch failures.

use crate::config::WebhookConfig;
use crate::dispatch::EventDispatcher;
use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Maximum accepted webhook body size (1 MiB).
const WEBHOOK_MAX_BODY: usize = 1024 * 1024;

#[derive(Clone)]
struct WebhookState {
    dispatcher: Arc<EventDispatcher>,
}

/// Build a router that feeds POSTs on `path` into `dispatcher`.
pub fn router(dispatcher: Arc<EventDispatcher>, path: &str) -> Router {
    Router::new()
        .route(path, post(webhook_handler))
        .layer(DefaultBodyLimit::disable())
        .with_state(WebhookState { dispatcher })
}

async fn webhook_handler(State(state): State<WebhookState>, body: Body) -> impl IntoResponse {
    // Read at most WEBHOOK_MAX_BODY; anything larger is acknowledged and dropped.
    let body = match axum::body::to_bytes(body, WEBHOOK_MAX_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("webhook: payload too large or unreadable, ignoring: {}", e);
            return (StatusCode::OK, "ok");
        }
    };

    let raw_body = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("webhook: body is not valid JSON: {}", e);
                return (StatusCode::OK, "ok");
            }
        }
    };
    debug!("webhook: received {} bytes", body.len());

    if let Err(e) = state.dispatcher.dispatch(raw_body).await {
        warn!("webhook: dispatch failed: {:#}", e);
    }
    (StatusCode::OK, "ok")
}

/// Bind the listener described by `config` and serve in a background task.
///
/// Returns the task handle and the address actually bound.
pub async fn start(
    config: &WebhookConfig,
    dispatcher: Arc<EventDispatcher>,
) -> Result<(tokio::task::JoinHandle<()>, SocketAddr)> {
    let app = router(dispatcher, &config.path);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;
    info!("webhook listening on http://{}{}", local_addr, config.path);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("webhook server error: {}", e);
        }
    });

    Ok((handle, local_addr))
}
