// tests/support/mocks/article_store.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Duration;

use autoblog_core::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use autoblog_core::domain::errors::{DomainError, DomainResult};

use super::time::fixed_now;

/// インメモリの記事ストア（書き込み回数を記録する）
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
    writes: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `n` 件の既存記事を持つストア
    pub fn with_articles(n: usize) -> Self {
        let store = Self::new();
        {
            let mut articles = store.articles.lock().unwrap();
            for i in 0..n {
                let article = store_article(
                    &articles,
                    NewArticle::new(
                        ArticleTitle::new(format!("existing {i}")).unwrap(),
                        ArticleContent::new("body"),
                    ),
                );
                articles.push(article);
            }
        }
        store
    }

    /// Make every subsequent call fail with a persistence error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    /// Number of write calls (`insert` or `insert_many`) received.
    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    fn check_available(&self) -> DomainResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

fn store_article(existing: &[Article], new: NewArticle) -> Article {
    let next = i64::try_from(existing.len()).unwrap() + 1;
    Article {
        id: ArticleId::new(next).unwrap(),
        title: new.title,
        content: new.content,
        created_at: fixed_now() + Duration::seconds(next),
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.articles.lock().unwrap();
        let created = store_article(&articles, article);
        articles.push(created.clone());
        Ok(created)
    }

    async fn insert_many(&self, batch: Vec<NewArticle>) -> DomainResult<()> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.articles.lock().unwrap();
        for article in batch {
            let created = store_article(&articles, article);
            articles.push(created);
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn count(&self) -> DomainResult<u64> {
        self.check_available()?;
        Ok(u64::try_from(self.len()).unwrap())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.check_available()?;
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<Article>> {
        self.check_available()?;
        let mut articles = self.articles.lock().unwrap().clone();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }
}
