// src/presentation/http/controllers/articles.rs
use crate::application::{dto::ArticleDto, queries::articles::GetArticleByIdQuery};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::PathRejection},
};

/// # Errors
///
/// Returns the generic 500 when the store cannot be read.
#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "All articles, newest first.", body = [ArticleDto]),
        (status = 500, description = "Store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

/// # Errors
///
/// Returns 400 for a malformed or non-positive id and 404 for an unknown one.
#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "rejected article id");
        HttpError::bad_request("article id must be a positive integer")
    })?;
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}
