//! Relay server setup
//!
//! Connects to the chat server, announces the relay, then serves webhook
//! deliveries until the shutdown coordinator resolves.

mod handler;
mod state;

pub use handler::{webhook_handler, EVENT_HEADER};
pub use state::RelayState;

use crate::dispatcher::Dispatcher;
use crate::formatter::formatters_for;
use crate::shutdown::{ShutdownCoordinator, ShutdownReason};
use axum::{
    routing::{get, post},
    Router,
};
use hook_common::{load_init_commands, AppConfig, AppError};
use hook_core::Destination;
use hook_irc::{ServerAddress, Transport, TransportConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;

/// Create the webhook router
pub fn create_router() -> Router<RelayState> {
    Router::new()
        .route("/", post(webhook_handler))
        .route("/health", get(health_check))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Build the complete application
pub fn create_app(state: RelayState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Queue the initial commands, then a `JOIN` per destination
pub async fn announce(
    transport: &Transport,
    init_commands: Vec<String>,
    destinations: &[Destination],
) -> Result<(), AppError> {
    for line in init_commands {
        transport.send_raw(line).await.map_err(AppError::connection)?;
    }
    for destination in destinations {
        tracing::info!(destination = %destination, "Joining");
        transport
            .join(destination.channel.clone())
            .await
            .map_err(AppError::connection)?;
    }
    Ok(())
}

/// Run the webhook listener
///
/// Only returns when binding or serving fails.
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!("Webhook listener on http://{}/", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(format!("Server error: {e}")))
}

/// Run the relay with configuration
///
/// Returns as soon as the shutdown race has been decided. Deliveries still in
/// flight at that point are abandoned.
pub async fn run(
    config: AppConfig,
    quit_requested: oneshot::Receiver<()>,
) -> Result<ShutdownReason, AppError> {
    let init_commands = load_init_commands(&config.relay.init_file).await?;

    let server = ServerAddress::parse(&config.irc.server).map_err(AppError::connection)?;
    let transport = Transport::connect(&server, TransportConfig::from(&config.irc))
        .await
        .map_err(AppError::connection)?;
    tracing::info!(server = %server, "Connected");

    announce(&transport, init_commands, &config.relay.destinations).await?;

    let dispatcher = Dispatcher::new(
        formatters_for(&config.relay.destinations),
        Arc::new(transport.clone()),
    );
    let app = create_app(RelayState::new(dispatcher));
    let addr = config.webhook.address();
    let coordinator = ShutdownCoordinator::new(transport, config.irc.quit_timeout());

    tokio::select! {
        result = run_server(app, &addr) => {
            result?;
            Err(AppError::Server("Webhook listener stopped".to_string()))
        }
        reason = coordinator.run(quit_requested) => Ok(reason),
    }
}
