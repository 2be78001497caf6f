//! Server bootstrap: state wiring, listener, and graceful shutdown.

use tracing::info;

use scanbench_core::config::AppConfig;
use scanbench_core::error::{AppError, ErrorKind};

use crate::router::build_router;
use crate::state::AppState;

/// Runs the ScanBench server until Ctrl+C or SIGTERM.
///
/// Creates the upload directory if absent. The database is not contacted
/// until the first request that needs it.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %config.app.env,
        "Starting ScanBench"
    );

    let state = AppState::new(config)?;
    state.upload_store.ensure_dir().await?;

    let addr = state.config.server.bind_address();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!(%addr, "ScanBench server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("ScanBench server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
///
/// A signal handler that cannot be installed simply never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
