use anyhow::Result;
use autoblog_core::{
    application::{
        ports::generation::{DisabledGenerator, TextGenerator},
        services::{ApplicationServices, PipelineSettings},
    },
    config::AppConfig,
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
    infrastructure::{
        database,
        generation::ChatCompletionsClient,
        repositories::{PostgresArticleReadRepository, PostgresArticleWriteRepository},
        scheduler::GenerationScheduler,
        seed_corpus,
    },
    presentation::http::{routes::build_router, state::HttpState},
    telemetry::init_tracing,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool));

    let (generator, generation_enabled) = build_generator(&config);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_write_repo),
        Arc::clone(&article_read_repo),
        generator,
        PipelineSettings {
            max_output_tokens: config.max_output_tokens(),
            overlap_policy: config.overlap_policy(),
            seed_corpus: seed_corpus::default_corpus()?,
        },
    ));

    services.seeder.ensure_minimum(config.seed_floor()).await?;

    let scheduler = if generation_enabled {
        Some(GenerationScheduler::start(Arc::clone(&services.generation), config.cadence()).await?)
    } else {
        tracing::warn!("generation cadence not armed: no credential configured");
        None
    };

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(scheduler) = scheduler {
        if let Err(err) = scheduler.shutdown().await {
            tracing::warn!(error = %err, "scheduler did not shut down cleanly");
        }
    }

    Ok(())
}

/// A missing credential disables generation without stopping the read side.
fn build_generator(config: &AppConfig) -> (Arc<dyn TextGenerator>, bool) {
    match ChatCompletionsClient::new(config.generation_settings()) {
        Ok(client) => {
            tracing::info!(model = client.model(), "generation client ready");
            (Arc::new(client), true)
        }
        Err(err) => {
            tracing::error!(error = %err, "generation disabled, set HF_TOKEN to enable it");
            (Arc::new(DisabledGenerator), false)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
