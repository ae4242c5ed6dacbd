//! Process bootstrap: tracing, actor system, seed catalog, HTTP server.

use std::net::SocketAddr;

use tracing::info;

use product_service::api::{self, AppState};
use product_service::lifecycle::{seed_demo_catalog, setup_tracing, ProductSystem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting product service");

    let system = ProductSystem::new();
    seed_demo_catalog(&system.repository).await?;

    let state = AppState {
        repository: system.repository.clone(),
    };
    let app = api::router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    system.shutdown().await?;
    Ok(())
}
