pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, run_migrations, Repository};
pub use domain::{Catalogue, Genre, GenreInsert, NewCatalogue, NewGenre};
pub use error::AppError;
