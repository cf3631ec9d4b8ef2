//! Schema migrations. DDL lives in `migrations/` and is embedded at compile time.

use crate::error::AppError;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply pending migrations. Already-applied versions are skipped.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(count = MIGRATOR.iter().count(), "migrations applied");
    Ok(())
}
