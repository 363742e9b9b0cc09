//! High-level async API for the cabinet.
//!
//! [`Cabinet`] is the entry point callers use. It holds only the database
//! path; every operation opens its own [`Database`] connection on a blocking
//! thread, runs to completion (inside a transaction where it writes more than
//! one row) and drops the connection before returning.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │     Cabinet     │    │    Database     │
//! │  (CLI, tests)   │───▶│ (album_ops,     │───▶│   (via db/)     │
//! │                 │    │  user_ops, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: Factory for creating [`Cabinet`] instances
//! - [`album_ops`]: Album CRUD, search and detail pages
//! - [`genre_ops`]: Genre reference data
//! - [`favorite_ops`]: Favorite toggling
//! - [`review_ops`]: Reviews and ratings
//! - [`user_ops`]: Registration, login, profiles, stats
//!
//! # Usage
//!
//! ```rust,no_run
//! use vinyl_core::{CabinetBuilder, params::{CreateAlbum, CreateGenre, RegisterUser}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cabinet = CabinetBuilder::new()
//!     .with_database_path(Some("cabinet.db"))
//!     .build()
//!     .await?;
//!
//! let user_id = cabinet
//!     .register_user(&RegisterUser {
//!         username: "alice".to_string(),
//!         password: "hunter2".to_string(),
//!     })
//!     .await?
//!     .into_value()
//!     .expect("fresh username");
//!
//! let rock = cabinet
//!     .add_genre(&CreateGenre { name: "Rock".to_string() })
//!     .await?
//!     .into_value()
//!     .expect("new genre");
//! let outcome = cabinet
//!     .add_album(&CreateAlbum {
//!         title: "Rumours".to_string(),
//!         artist: "Fleetwood Mac".to_string(),
//!         year: 1977,
//!         genre_ids: vec![rock],
//!         owner_id: user_id,
//!         image_url: None,
//!     })
//!     .await?;
//! println!("{}", outcome.message());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{CabinetError, Result},
};

pub mod album_ops;
pub mod builder;
pub mod favorite_ops;
pub mod genre_ops;
pub mod review_ops;
pub mod user_ops;


pub use builder::CabinetBuilder;

/// Main cabinet interface for albums, genres, favorites, reviews and users.
#[derive(Debug, Clone)]
pub struct Cabinet {
    pub(crate) db_path: PathBuf,
}

impl Cabinet {
    /// Creates a new cabinet with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file backing this cabinet.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens a connection on a blocking thread, runs `f` and closes the
    /// connection.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(CabinetError::join)?
    }
}
