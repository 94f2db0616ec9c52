// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            generation::{ArticleGenerationService, OverlapPolicy},
            seeding::MinimumContentSeeder,
        },
        ports::generation::TextGenerator,
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository, NewArticle},
};

/// Tunables for the generation pipeline that do not belong to any single port.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub max_output_tokens: u32,
    pub overlap_policy: OverlapPolicy,
    pub seed_corpus: Vec<NewArticle>,
}

pub struct ApplicationServices {
    pub generation: Arc<ArticleGenerationService>,
    pub seeder: Arc<MinimumContentSeeder>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn TextGenerator>,
        settings: PipelineSettings,
    ) -> Self {
        let generation = Arc::new(
            ArticleGenerationService::new(generator, Arc::clone(&article_write_repo))
                .with_max_output_tokens(settings.max_output_tokens)
                .with_policy(settings.overlap_policy),
        );

        let seeder = Arc::new(MinimumContentSeeder::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_write_repo),
            settings.seed_corpus,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            generation,
            seeder,
            article_queries,
        }
    }
}
