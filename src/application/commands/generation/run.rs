// src/application/commands/generation/run.rs
use super::{ArticleGenerationService, OverlapPolicy};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleTitle, ExtractedArticle, NewArticle, extract},
};

pub const GENERATION_PROMPT: &str = "Write a concise blog article. Provide a short title in the first line, then a paragraph body. Topic: interesting tech topic for a general audience.";

impl ArticleGenerationService {
    /// Generate one article and store it.
    ///
    /// A generator failure is returned as-is and nothing is stored; there is
    /// no retry here. Callers decide whether to surface or swallow the error.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Generation`] when the generator fails,
    /// [`ApplicationError::Conflict`] when single-flight rejects an overlapping
    /// run, and [`ApplicationError::Domain`] when the insert fails.
    #[tracing::instrument(skip(self), name = "generation.run", fields(policy = ?self.policy))]
    pub async fn run(&self) -> ApplicationResult<ArticleDto> {
        let _guard = match self.policy {
            OverlapPolicy::Allow => None,
            OverlapPolicy::SingleFlight => Some(
                self.in_flight
                    .try_lock()
                    .map_err(|_| ApplicationError::conflict("generation already in progress"))?,
            ),
        };

        let raw = self
            .generator
            .generate(GENERATION_PROMPT, self.max_output_tokens)
            .await?;
        tracing::debug!(chars = raw.chars().count(), "generation call returned");

        let created = self.write_repo.insert(compose_article(&raw)).await?;
        tracing::info!(article_id = %created.id, title = %created.title, "generated article stored");
        Ok(created.into())
    }
}

/// Turn raw generated text into the record to persist.
#[must_use]
pub fn compose_article(raw: &str) -> NewArticle {
    let ExtractedArticle { title, body } = extract(raw);
    let title = ArticleTitle::new(&title).unwrap_or_else(|_| ArticleTitle::untitled());
    let content = if body.is_empty() { raw.to_string() } else { body };
    NewArticle::new(title, ArticleContent::new(content))
}
