use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::app::App;
use crate::infrastructure::cli::Cli;

/// Spawns a task that cancels `cancel_token` on SIGTERM/SIGINT
pub fn setup_shutdown_signal(cancel_token: CancellationToken) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown...");
            }
        }

        cancel_token.cancel();
    });
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profiler_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run(cli: Cli) -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!("Starting Profiler Engine");

    // Configuration problems abort before anything binds
    let config = cli
        .loader()
        .load()
        .context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Profile: {}", config.profile_kind());
    tracing::info!("  Server: {}", config.server.bind_address());

    let app = Arc::new(App::from_config(&config));

    let cancel_token = CancellationToken::new();
    setup_shutdown_signal(cancel_token.clone());

    let listener = TcpListener::bind(config.server.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address()))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    serve(listener, app, cancel_token).await
}

/// Serve HTTP on `listener` until `cancel_token` is cancelled, then drain
/// in-flight requests.
pub async fn serve(
    listener: TcpListener,
    app: Arc<App>,
    cancel_token: CancellationToken,
) -> Result<()> {
    axum::serve(listener, api::router(app))
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
            tracing::info!("HTTP server received shutdown signal");
        })
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
