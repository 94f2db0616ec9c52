use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Every stored article, newest first. There is no paging.
    ///
    /// # Errors
    ///
    /// Returns the store's error when it cannot be read.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list_newest_first().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// # Errors
    ///
    /// Returns the store's error when it cannot be read.
    pub async fn count_articles(&self) -> ApplicationResult<u64> {
        Ok(self.read_repo.count().await?)
    }
}
