//! Database initialization and schema migrations.

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

/// Ordered, named migration scripts from `migrations/`.
///
/// Applied versions are tracked in `_sqlx_migrations`, the same table
/// `sqlx migrate run` uses, so the CLI and the server can be mixed freely.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open the SQLite database at `db_path`, creating it if needed.
///
/// Migrations are not applied here; see [`run_migrations`].
pub async fn init_db(db_path: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await?;

    info!("Database opened at {}", db_path);
    Ok(pool)
}

/// Apply all pending migrations. Returns the number of newly applied scripts.
pub async fn run_migrations(pool: &SqlitePool) -> Result<usize, sqlx::migrate::MigrateError> {
    info!("Running database migrations...");

    let before = applied_count(pool).await;
    MIGRATOR.run(pool).await?;
    let after = applied_count(pool).await;
    let applied = after.saturating_sub(before);

    info!(applied, total = MIGRATOR.iter().count(), "Migrations completed successfully");
    Ok(applied)
}

async fn applied_count(pool: &SqlitePool) -> usize {
    // The tracking table does not exist before the first run.
    sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = 1")
        .fetch_one(pool)
        .await
        .map(|(n,)| n as usize)
        .unwrap_or(0)
}

async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await?;

    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.get(0);
    tracing::debug!("SQLite journal_mode set to: {}", journal_mode);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}
