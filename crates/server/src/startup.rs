use std::{future::Future, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::{self, ServerState};
use service::{booking::BookingRepository, storage::BookingStore};

/// Resolve server settings: config file first, then `SERVER_*` / `TOKIO_WORKER_THREADS`
pub fn load_server_config() -> ServerConfig {
    match AppConfig::load_and_validate() {
        Ok(cfg) => cfg.server,
        Err(e) => {
            info!(error = %e, "no usable config file, falling back to environment");
            ServerConfig::from_env()
        }
    }
}

/// Assemble the router around the given store
pub fn build_app(bookings: Arc<dyn BookingRepository>) -> Router {
    routes::build_router(ServerState::new(bookings))
}

/// Bind, then serve a fresh in-memory store until `shutdown` resolves.
///
/// Logging is the caller's job; this only emits events.
pub async fn run<F>(server: &ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(BookingStore::new());
    let listener = TcpListener::bind(server.bind_addr()?).await?;
    info!(addr = %listener.local_addr()?, "booking-svc listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
