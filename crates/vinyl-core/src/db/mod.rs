//! Database operations and SQLite management for the cabinet.
//!
//! This module provides low-level database operations for Vinyl Cabinet. It
//! owns the SQLite connection, enables foreign-key enforcement (cascading
//! deletes depend on it), manages the schema and exposes query interfaces for
//! albums, genres, favorites, reviews and users.
//!
//! A [`Database`] is one connection. The async [`crate::Cabinet`] facade opens
//! a fresh one per logical operation and drops it when the operation ends.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod album_queries;
pub mod executor;
pub mod favorite_queries;
pub mod genre_queries;
pub mod migrations;
pub mod review_queries;
pub mod user_queries;

pub use executor::Record;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("opening database at {}", path.as_ref().display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
