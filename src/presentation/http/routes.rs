// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, generation},
    openapi::{self, HealthResponse},
};
use axum::{
    Extension, Json, Router,
    http::{Method, StatusCode},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const SERVICE_NAME: &str = "autoblog-core";

#[must_use]
pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/articles", get(articles::list_articles))
        .route("/articles/{id}", get(articles::get_article))
        .route("/generate", post(generation::generate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and store reachable.", body = crate::presentation::http::openapi::HealthResponse),
        (status = 503, description = "Store unreachable.", body = crate::presentation::http::openapi::HealthResponse)
    ),
    tag = "System"
)]
pub async fn health(
    Extension(state): Extension<HttpState>,
) -> (StatusCode, Json<HealthResponse>) {
    let timestamp = chrono::Utc::now().to_rfc3339();
    match state.services.article_queries.count_articles().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".into(),
                timestamp,
                database: "connected".into(),
                service: SERVICE_NAME.into(),
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".into(),
                    timestamp,
                    database: "disconnected".into(),
                    service: SERVICE_NAME.into(),
                }),
            )
        }
    }
}
