use std::process::ExitCode;

use dotenvy::dotenv;
use tokio::runtime::{Builder, Runtime};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Multi-thread runtime; `None` keeps tokio's own default (one per core).
fn build_runtime(worker_threads: Option<usize>) -> std::io::Result<Runtime> {
    let mut builder = Builder::new_multi_thread();
    builder.enable_all();
    if let Some(n) = worker_threads {
        builder.worker_threads(n);
    }
    builder.build()
}

/// Resolves on Ctrl+C. If the handler cannot be installed the server keeps
/// running and must be killed externally.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received, draining connections; all bookings are dropped"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}

fn main() -> ExitCode {
    // .env may carry RUST_LOG / LOG_FORMAT, so it goes first
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Uuid::new_v4();
    std::panic::set_hook(Box::new(move |panic| {
        error!(%instance, message = %panic, "panic");
    }));

    let cfg = server::load_server_config();
    let rt = match build_runtime(cfg.worker_threads) {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        %instance,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        host = %cfg.host,
        port = cfg.port,
        "booking-svc starting"
    );

    match rt.block_on(server::run(&cfg, shutdown_signal())) {
        Ok(()) => {
            info!(%instance, "booking-svc stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%instance, error = %e, "booking-svc failed");
            ExitCode::FAILURE
        }
    }
}
