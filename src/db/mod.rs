//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and embedded migrations
//! - SQLite pragma configuration
//! - Repository layer for database operations

pub mod migrations;
pub mod repo;

pub use migrations::{init_db, run_migrations, MIGRATOR};
pub use repo::Repository;
