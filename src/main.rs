//! KnockMock backend server.
//!
//! Serves the topic listing and raw test content for the frontend. One mode
//! only: configure from the environment, then run the HTTP server until
//! Ctrl+C.

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use knockmock_server::config::Config;
use knockmock_server::github::GitHubClient;
use knockmock_server::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let client = Arc::new(GitHubClient::new(&config)?);

    // The frontend is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(client)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to port {}: {}", config.port, e);
            eprintln!("Set PORT to a free port and retry.");
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = config.port,
        repo = %format!("{}/{}", config.repo.owner, config.repo.repo),
        branch = config.repo.branch,
        "server running"
    );

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        tracing::info!("shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
