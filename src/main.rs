use std::net::SocketAddr;

use hyper::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod api;
mod audit_layer;
mod game;
mod round;
mod solver;
mod state;
mod websocket;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = state::new_state();

    // Build your router
    let app = api::routes::create_router(state)
        // 1) Attach the audit layer inside
        .layer(audit_layer::AuditLayer)
        // 2) Attach CorsLayer last, so it's the outer layer
        .layer(cors_layer());

    // Start server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8000u16);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "server listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

/// Lock CORS to ALLOWED_ORIGIN when set; stay permissive otherwise
fn cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    match std::env::var("ALLOWED_ORIGIN")
        .ok()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => base.allow_origin(origin),
        None => base.allow_origin(Any),
    }
}
