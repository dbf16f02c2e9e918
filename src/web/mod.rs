// Web server: Axum JSON API serving the Shared Rewards card.
//
// Any frontend can render the card from `/api/summary/{username}`; the
// response carries the same display strings the terminal renderer uses.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::summary::SummaryFetcher;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<SummaryFetcher>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(fetcher: SummaryFetcher, port: u16, bind: &str) -> Result<()> {
    let state = AppState {
        fetcher: Arc::new(fetcher),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Shared Rewards API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/summary/{username}",
            get(handlers::summary::get_summary),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check: always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
