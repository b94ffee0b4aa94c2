use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use reelrank_core::{EmbeddingStore, MovieRecommender};
use reelrank_server::{build_router, config::ServerConfig, state::AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("reelrank_server=info".parse().unwrap())
                .add_directive("reelrank_core=info".parse().unwrap()),
        )
        .init();

    info!("Initializing reelrank server...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid server configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Load the embedding store once. There is no degraded mode without an
    // embedding space, so a failed load aborts startup.
    let store = match EmbeddingStore::load(&config.model_path) {
        Ok(store) => store,
        Err(e) => {
            error!(path = ?config.model_path, error = %e, "Failed to load embedding store");
            std::process::exit(1);
        }
    };

    let recommender = MovieRecommender::new(Arc::new(store));
    let app_state = AppState::new(recommender);
    info!("Application state created.");

    let app = build_router(app_state);

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(host = %config.host, port = config.port, error = %e, "Invalid listen address");
            std::process::exit(1);
        }
    };
    info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>(); // On non-Unix, just wait for Ctrl+C

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down...");
        },
    }
}
