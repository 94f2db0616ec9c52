use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Write side of the article store.
///
/// # Errors
///
/// Every method returns [`crate::domain::errors::DomainError::Persistence`]
/// when the store is unreachable and `Validation` when a row breaks a column
/// constraint.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persist one article; the store assigns `id` and `created_at`.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Persist every article in one atomic batch.
    async fn insert_many(&self, articles: Vec<NewArticle>) -> DomainResult<()>;
}

/// Read side of the article store. Failures surface as
/// [`crate::domain::errors::DomainError::Persistence`].
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// All articles ordered by `created_at` descending.
    async fn list_newest_first(&self) -> DomainResult<Vec<Article>>;
}
