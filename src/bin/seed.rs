//! One-shot seeding: run migrations, top the store up to the configured
//! floor, and exit.

use anyhow::Result;
use autoblog_core::{
    application::commands::seeding::{MinimumContentSeeder, SeedOutcome},
    config::AppConfig,
    infrastructure::{
        database,
        repositories::{PostgresArticleReadRepository, PostgresArticleWriteRepository},
        seed_corpus,
    },
    telemetry::init_tracing,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let seeder = MinimumContentSeeder::new(
        Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        Arc::new(PostgresArticleWriteRepository::new(pool)),
        seed_corpus::default_corpus()?,
    );

    match seeder.ensure_minimum(config.seed_floor()).await? {
        SeedOutcome::AlreadySatisfied { count } => {
            println!("seed: already have {count} articles");
        }
        SeedOutcome::Seeded { inserted } => {
            println!("seeded {inserted} articles");
        }
    }

    Ok(())
}
