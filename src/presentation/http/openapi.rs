// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub database: String,
    pub service: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::generation::generate,
        super::routes::health
    ),
    components(
        schemas(
            HealthResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::ArticleDto
        )
    ),
    tags(
        (name = "Articles", description = "Read access to stored articles"),
        (name = "Generation", description = "On-demand article generation"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Autoblog API",
        description = "Scheduled article generation backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

#[allow(clippy::unused_async)]
pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

#[must_use]
pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}
