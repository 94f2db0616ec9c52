use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

/// # Errors
///
/// Returns the driver error when no connection can be established.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(8))
        .connect(database_url)
        .await
}

/// # Errors
///
/// Returns the migration error when a script fails or the history diverges.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
