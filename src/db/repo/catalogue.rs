//! Catalogue (movie entry) operations for the repository.

use chrono::{DateTime, Utc};
use sqlx::Row;

use super::Repository;
use crate::domain::{Catalogue, NewCatalogue};

impl Repository {
    /// Insert a movie entry with `like_count = 0`.
    ///
    /// No duplicate check is made and `genre_id` is stored as given, whether
    /// or not a genre with that id exists.
    ///
    /// # Errors
    /// Returns an error if the insert or the commit fails.
    pub async fn create_catalogue(&self, entry: &NewCatalogue) -> Result<Catalogue, sqlx::Error> {
        let created_at = Utc::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO catalogue (
                name, year, description, genre_id, like_count, duration, created_at
            ) VALUES (?, ?, ?, ?, 0, ?, ?)
            "#,
        )
        .bind(entry.name.as_str())
        .bind(entry.year)
        .bind(entry.description.as_str())
        .bind(entry.genre_id)
        .bind(entry.duration)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        tx.commit().await?;

        Ok(Catalogue {
            id,
            name: entry.name.clone(),
            year: entry.year,
            description: entry.description.clone(),
            genre_id: Some(entry.genre_id),
            like_count: 0,
            duration: entry.duration,
            created_at,
        })
    }

    /// List all movie entries in insertion order, without resolving genres.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_catalogue(&self) -> Result<Vec<Catalogue>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query(
            r#"
            SELECT id, name, year, description, genre_id, like_count, duration, created_at
            FROM catalogue
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let entries = rows
            .iter()
            .map(|row| Catalogue {
                id: row.get("id"),
                name: row.get("name"),
                year: row.get("year"),
                description: row.get("description"),
                genre_id: row.get::<Option<i64>, _>("genre_id"),
                like_count: row.get("like_count"),
                duration: row.get("duration"),
                created_at: row.get::<DateTime<Utc>, _>("created_at"),
            })
            .collect();

        Ok(entries)
    }
}
