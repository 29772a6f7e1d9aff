use std::env;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bind = env::var("VIGIL_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Definitions (public rule data)
        .route("/definitions", get(routes::definitions::list_definitions))
        .route(
            "/definitions/{id}",
            get(routes::definitions::get_definition_detail),
        )
        .route(
            "/definitions/{id}/evaluate",
            post(routes::evaluate::evaluate),
        )
        // Escalation pathways
        .route("/escalation", get(routes::escalation::list_pathways))
        .route("/escalation/{id}", post(routes::escalation::decide))
        .layer(axum_mw::from_fn(middleware::log::request_log))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(addr = %bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
