// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

/// A stored article. Immutable once the store has assigned `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

impl NewArticle {
    #[must_use]
    pub fn new(title: ArticleTitle, content: ArticleContent) -> Self {
        Self { title, content }
    }
}
