//! Pamoja community hub server
//!
//! Serves the compiled Leptos bundle. All membership and checkout logic
//! runs in the browser; this binary holds no member data and exposes no
//! payment endpoints.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pamoja_core::PlanCatalog;

use crate::handlers::health_check;
use crate::state::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let catalog = PlanCatalog::standard();

    for plan in catalog.iter() {
        tracing::info!("  Plan: {} ({})", plan.name, plan.display_price());
    }

    let state = AppState {
        catalog: Arc::new(catalog),
        config: Arc::new(config.clone()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Pamoja hub running on http://{}", config.bind_addr);
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  /*      - {}", config.static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}
