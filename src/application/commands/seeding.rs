// src/application/commands/seeding.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleReadRepository, ArticleWriteRepository, NewArticle},
};

pub const DEFAULT_SEED_FLOOR: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held at least `floor` articles; nothing was written.
    AlreadySatisfied { count: u64 },
    /// The fallback corpus was inserted in one batch.
    Seeded { inserted: usize },
}

/// Guarantees a minimum number of stored articles on first boot.
///
/// The corpus is inserted as a whole whenever the count is below the floor.
/// Existing rows are not compared against it, so the seeder is meant to run
/// against an empty or nearly empty store. A floor larger than the corpus is
/// rejected: one batch could never satisfy it and every boot would insert the
/// corpus again.
pub struct MinimumContentSeeder {
    read_repo: Arc<dyn ArticleReadRepository>,
    write_repo: Arc<dyn ArticleWriteRepository>,
    corpus: Vec<NewArticle>,
}

impl MinimumContentSeeder {
    #[must_use]
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        corpus: Vec<NewArticle>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            corpus,
        }
    }

    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] when `floor` exceeds the corpus
    /// size, and the store's error when counting or inserting fails.
    #[tracing::instrument(skip(self), name = "seeder.ensure_minimum")]
    pub async fn ensure_minimum(&self, floor: u64) -> ApplicationResult<SeedOutcome> {
        let corpus_len = u64::try_from(self.corpus.len()).unwrap_or(u64::MAX);
        if floor > corpus_len {
            return Err(ApplicationError::validation(format!(
                "seed floor {floor} exceeds the {corpus_len} articles available to seed"
            )));
        }

        let count = self.read_repo.count().await?;
        if count >= floor {
            tracing::info!(count, floor, "seed skipped: store already satisfies floor");
            return Ok(SeedOutcome::AlreadySatisfied { count });
        }

        let inserted = self.corpus.len();
        self.write_repo.insert_many(self.corpus.clone()).await?;
        tracing::info!(count, floor, inserted, "seeded fallback articles");
        Ok(SeedOutcome::Seeded { inserted })
    }
}
