//! A JSON HTTP API for a todo list held in process memory.

mod api;
mod config;
mod logging;
mod todos;

use std::sync::Arc;

use tokio::{net::TcpListener, signal};

use crate::{config::Config, todos::TodoService};

/// The state shared by all API route handlers.
#[derive(Clone, Default, Debug)]
pub(crate) struct AppState {
    /// The only [`TodoService`] in the process.
    pub(crate) todos: Arc<TodoService>,
}

/// # Errors
///
/// See implementation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    logging::init(&config)?;

    let state = AppState {
        todos: Arc::new(TodoService::new()),
    };

    tracing::info!("Listening to {}...", config.address);

    let listener = TcpListener::bind(&config.address).await?;

    tracing::info!("Ready!");

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down.");

    Ok(())
}

/// Resolves once the process receives Ctrl+C or (on Unix) `SIGTERM`.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutting down...");
}
