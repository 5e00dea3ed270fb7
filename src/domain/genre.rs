//! Genre record and its creation payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored genre. Names are unique across all genres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /genre`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGenre {
    pub name: String,
}

impl NewGenre {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Outcome of a genre insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreInsert {
    /// A new row was written.
    Created(Genre),
    /// A genre with the same name already existed; nothing was written.
    AlreadyExists,
}

impl GenreInsert {
    pub fn is_created(&self) -> bool {
        matches!(self, GenreInsert::Created(_))
    }
}
