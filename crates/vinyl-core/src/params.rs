//! Parameter structures for cabinet operations
//!
//! Shared parameter structures that every interface (the CLI today) converts
//! its own argument types into. They carry already-trimmed, already-coerced
//! values: form validation and ownership checks happen before these are
//! built.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Cabinet      │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  (async facade) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding an album.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAlbum {
    pub title: String,
    pub artist: String,
    pub year: i64,
    /// Genres to associate, at least one after validation
    pub genre_ids: Vec<u64>,
    /// Owning user
    pub owner_id: u64,
    /// Optional cover URL; an empty string is stored as no image
    pub image_url: Option<String>,
}

/// Parameters for editing an album. Every field is overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAlbum {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub year: i64,
    pub genre_ids: Vec<u64>,
    pub image_url: Option<String>,
}

/// Parameters for replacing the genre set of an album.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetAlbumGenres {
    pub album_id: u64,
    pub genre_ids: Vec<u64>,
}

/// Parameters for free-text album search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchAlbums {
    /// Whitespace-separated search terms
    pub query: String,
    /// User whose favorites annotate the results
    pub user_id: Option<u64>,
}

/// Parameters identifying a (user, album) pair, for favorites and review
/// checks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UserAlbum {
    pub user_id: u64,
    pub album_id: u64,
}

/// Parameters for writing a review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReview {
    pub album_id: u64,
    pub user_id: u64,
    pub stars: u8,
    pub text: String,
}

/// Parameters for registering a user. The password is hashed by the
/// cabinet before storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
}

/// Parameters for logging in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Parameters for saving a profile. Fields left `None` are cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub user_id: u64,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
    pub favorite_genre_id: Option<u64>,
}

/// Parameters for adding a genre to the reference list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}
