//! Catalogue (movie entry) record and its creation payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored movie entry.
///
/// `genre_id` is a loose reference to [`Genre::id`](super::Genre); it is
/// never checked against the genre table, so it may dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub id: i64,
    pub name: String,
    pub year: i64,
    pub description: String,
    pub genre_id: Option<i64>,
    pub like_count: i64,
    /// Running time in minutes.
    pub duration: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /catalogue`. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCatalogue {
    pub name: String,
    pub description: String,
    pub year: i64,
    pub duration: i64,
    pub genre_id: i64,
}
