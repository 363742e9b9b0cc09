//! Album model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{AverageRating, Genre, Review};

/// An album as presented to callers: the stored row joined with its owner's
/// username and its full genre list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Unique identifier for the album
    pub id: u64,

    /// Album title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Release year
    pub year: i64,

    /// Optional cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// ID of the user who added the album
    pub owner_id: u64,

    /// Username of the owner
    pub owner_username: String,

    /// Genres, ordered alphabetically by name
    #[serde(default)]
    pub genres: Vec<Genre>,

    /// Whether the requesting user has favorited the album. `None` when the
    /// view was built without a requesting user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl Album {
    /// Genre names in display order.
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }

    /// Genre IDs in display order.
    pub fn genre_ids(&self) -> Vec<u64> {
        self.genres.iter().map(|g| g.id).collect()
    }
}

/// Lightweight album reference used in activity feeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumRef {
    pub id: u64,
    pub title: String,
    pub artist: String,
}

/// Everything an album page shows: the album, its reviews (newest first),
/// the average rating and the viewer's relationship to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlbumDetails {
    pub album: Album,
    pub reviews: Vec<Review>,
    pub average_rating: AverageRating,
    /// Whether the viewer already reviewed the album; false when anonymous
    pub viewer_has_reviewed: bool,
}
