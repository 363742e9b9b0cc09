//! Core library for the Vinyl Cabinet record collection.
//!
//! Users catalogue vinyl albums, tag them with genres, mark favorites and
//! write star-rated reviews. This crate holds the SQLite-backed data access
//! layer, the data models, form validation, password hashing and the async
//! [`Cabinet`] facade the CLI talks to.
//!
//! - [`db`]: Synchronous [`Database`] with schema setup, the raw
//!   execute/fetch primitives and every query
//! - [`cabinet`]: Async facade opening one connection per operation
//! - [`models`]: Album, genre, review and user shapes
//! - [`validation`]: Pure field validators for submitted forms
//! - [`display`]: Markdown rendering of models and outcomes
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vinyl_core::{CabinetBuilder, params::SearchAlbums};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cabinet = CabinetBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let albums = cabinet
//!     .search_albums(&SearchAlbums {
//!         query: "rock 1970".to_string(),
//!         user_id: None,
//!     })
//!     .await?;
//! for album in &albums {
//!     println!("{album}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod cabinet;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod validation;

// Re-export commonly used types
pub use cabinet::{Cabinet, CabinetBuilder};
pub use db::{Database, Record};
pub use display::{Albums, Genres, LocalDateTime, OperationStatus, Reviews};
pub use error::{CabinetError, Result};
pub use models::{
    Album, AlbumDetails, AverageRating, Genre, Outcome, Review, User, UserActivity, UserProfile,
    UserStats,
};
pub use validation::{AlbumForm, Field, ValidationErrors};
