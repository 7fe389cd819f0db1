//! Webhook handler
//!
//! Hands each delivery to the dispatcher. The sender always gets `200 OK`;
//! anything that goes wrong is only visible in the logs.

use super::RelayState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};

/// Header carrying the event discriminator
pub const EVENT_HEADER: &str = "x-github-event";

/// Webhook delivery handler
pub async fn webhook_handler(
    State(state): State<RelayState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let discriminator = headers
        .get(EVENT_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::debug!(discriminator, bytes = body.len(), "Webhook delivery");
    state.dispatcher().handle_delivery(discriminator, &body).await;

    StatusCode::OK
}
