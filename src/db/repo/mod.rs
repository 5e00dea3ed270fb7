//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by entity:
//! - `genres.rs` - Genre creation and listing
//! - `catalogue.rs` - Movie entry creation and listing
//!
//! Every operation checks a connection (or a transaction, for writes) out of
//! the pool for its own duration only. The connection goes back to the pool
//! when it is dropped, on success and on error alike.

mod catalogue;
mod genres;

use sqlx::sqlite::SqlitePool;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round-trip a trivial query to check the database is reachable.
    ///
    /// # Errors
    /// Returns an error if no connection can be acquired or the query fails.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
