//! Display formatting for cabinet data.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! are wrapped in newtypes so empty lists render a friendly line, and write
//! outcomes render through [`OperationStatus`]. Everything is markdown, ready
//! for the terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers &     │    │   Formatted     │
//! │ (Album, Review) │───▶│  Outcomes       │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`Albums`], [`Reviews`], [`Genres`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: Display implementations for domain models
//!
//! # Usage
//!
//! ```rust
//! use vinyl_core::{display::{Albums, OperationStatus}, models::Outcome};
//!
//! assert_eq!(Albums(vec![]).to_string(), "No albums found.\n");
//!
//! let outcome: Outcome<u64> = Outcome::success(7, "Album added successfully.");
//! let status = OperationStatus::from(&outcome);
//! assert_eq!(status.to_string(), "Success: Album added successfully.\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{Albums, Genres, Reviews};
pub use datetime::{LocalDate, LocalDateTime};
pub use status::OperationStatus;
