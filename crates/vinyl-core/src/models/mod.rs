//! Data models for albums, genres, reviews and users.
//!
//! These are the shapes handed back by the data access layer. Each album view
//! is fully annotated (owner username and genre list) so callers never need
//! a second lookup. Display implementations live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use vinyl_core::models::{Album, AverageRating, Genre};
//!
//! let album = Album {
//!     id: 1,
//!     title: "Kind of Blue".to_string(),
//!     artist: "Miles Davis".to_string(),
//!     year: 1959,
//!     image_url: None,
//!     owner_id: 1,
//!     owner_username: "alice".to_string(),
//!     genres: vec![Genre { id: 3, name: "Jazz".to_string() }],
//!     is_favorite: None,
//! };
//! assert_eq!(album.genre_names(), vec!["Jazz"]);
//!
//! assert_eq!(AverageRating::from_average(Some(4.25)).value(), Some(4.3));
//! assert_eq!(AverageRating::from_average(None), AverageRating::NoReviews);
//! ```

pub mod album;
pub mod genre;
pub mod outcome;
pub mod review;
pub mod user;


pub use album::{Album, AlbumDetails, AlbumRef};
pub use genre::Genre;
pub use outcome::Outcome;
pub use review::{AverageRating, MAX_STARS, MIN_STARS, Review, round_to_tenth, stars_in_range};
pub use user::{ActivityReview, User, UserActivity, UserCredentials, UserProfile, UserStats};
