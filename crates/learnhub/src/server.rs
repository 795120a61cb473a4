//! HTTP server lifecycle.

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::api::{app, AppState};
use crate::config::Config;
use crate::error::{Error, Result};

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &Config) -> Result<()> {
    let address = config.bind_address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| Error::Bind {
            address: address.clone(),
            source,
        })?;

    serve_on(listener, AppState::from_config(config), config).await
}

/// Serve on an already-bound listener.
///
/// # Errors
///
/// Returns an error if the server fails while running.
pub async fn serve_on(listener: TcpListener, state: AppState, config: &Config) -> Result<()> {
    let local = listener.local_addr()?;
    let router = app(state, config.cors_max_age());

    info!("Server running on {local}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
