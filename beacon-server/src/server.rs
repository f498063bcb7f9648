use crate::config::ServerConfig;
use crate::error::RelayResult;
use crate::room::RoomManager;
use crate::signaling::{healthz, list_rooms, ws_handler};
use crate::transport::ConnectionRegistry;
use axum::Router;
use axum::routing::get;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Shared state handed to every axum handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: ConnectionRegistry,
    pub rooms: RoomManager,
    pub heartbeat_interval: Duration,
    pub write_timeout: Duration,
}

/// One relay instance: its own registry, hub and HTTP router.
pub struct BeaconServer {
    config: ServerConfig,
    state: AppState,
}

impl BeaconServer {
    /// Must be called inside a tokio runtime; the room hub is spawned here.
    pub fn new(config: ServerConfig) -> RelayResult<Self> {
        config.validate()?;

        let registry = ConnectionRegistry::new();
        let rooms = RoomManager::new(Arc::new(registry.clone()), config.command_buffer);

        let state = AppState {
            registry,
            rooms,
            heartbeat_interval: config.heartbeat_interval,
            write_timeout: config.write_timeout,
        };

        Ok(Self { config, state })
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/ws", get(ws_handler))
            .route("/api/rooms", get(list_rooms))
            .route("/healthz", get(healthz))
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Binds the configured address and serves until Ctrl+C.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr).await?;
        info!("Signaling server listening on http://{}", listener.local_addr()?);

        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Signaling server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
