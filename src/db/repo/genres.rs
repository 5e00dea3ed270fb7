//! Genre operations for the repository.

use chrono::{DateTime, Utc};
use sqlx::Row;

use super::Repository;
use crate::domain::{Genre, GenreInsert, NewGenre};

impl Repository {
    /// Insert a genre unless one with the same name already exists.
    ///
    /// The existence check is the `UNIQUE(name)` constraint itself, so two
    /// concurrent calls with the same name produce exactly one row.
    ///
    /// # Errors
    /// Returns an error if the insert or the commit fails.
    pub async fn create_genre(&self, genre: &NewGenre) -> Result<GenreInsert, sqlx::Error> {
        let created_at = Utc::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO genre (name, created_at)
            VALUES (?, ?)
            ON CONFLICT(name) DO NOTHING
            "#,
        )
        .bind(genre.name.as_str())
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            // Nothing staged; dropping the transaction rolls it back.
            return Ok(GenreInsert::AlreadyExists);
        }

        let id = result.last_insert_rowid();
        tx.commit().await?;

        Ok(GenreInsert::Created(Genre {
            id,
            name: genre.name.clone(),
            created_at,
        }))
    }

    /// List all genres in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_genres(&self) -> Result<Vec<Genre>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM genre
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let genres = rows
            .iter()
            .map(|row| Genre {
                id: row.get("id"),
                name: row.get("name"),
                created_at: row.get::<DateTime<Utc>, _>("created_at"),
            })
            .collect();

        Ok(genres)
    }
}
