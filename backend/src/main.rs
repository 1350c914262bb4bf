use anyhow::Context;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

mod handlers {
    pub mod contact_handlers;
}

use handlers::contact_handlers;

async fn health_check() -> &'static str {
    "OK"
}

fn app() -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CatchPanicLayer::custom(contact_handlers::handle_panic))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(Any) // Be cautious with `Any` in production; restrict to your frontend origin
                .allow_headers([header::CONTENT_TYPE]),
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app().into_make_service()).await?;
    Ok(())
}
