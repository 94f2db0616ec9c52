// src/presentation/http/controllers/generation.rs
use std::sync::Arc;

use crate::application::dto::ArticleDto;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// Manual trigger: runs the same job as the cadence and reports failure to
/// the caller.
///
/// The run is detached from the request, so a client that disconnects does
/// not cancel a generation that has already started.
///
/// # Errors
///
/// Returns 409 when single-flight mode rejects an overlapping run and the
/// generic 500 for every other failure.
#[utoipa::path(
    post,
    path = "/generate",
    responses(
        (status = 200, description = "Article generated and stored.", body = ArticleDto),
        (status = 409, description = "Another generation is in flight (single-flight mode).", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Generation failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Generation"
)]
pub async fn generate(Extension(state): Extension<HttpState>) -> HttpResult<Json<ArticleDto>> {
    tracing::info!("manual generation triggered");
    let service = Arc::clone(&state.services.generation);
    let outcome = tokio::spawn(async move { service.run().await })
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "generation task aborted");
            HttpError::internal()
        })?;
    outcome.into_http().map(Json)
}
