//! Domain records for the movie catalogue.
//!
//! This module provides:
//! - `Genre` and its creation payload
//! - `Catalogue` movie entries and their creation payload

pub mod catalogue;
pub mod genre;

pub use catalogue::{Catalogue, NewCatalogue};
pub use genre::{Genre, GenreInsert, NewGenre};
