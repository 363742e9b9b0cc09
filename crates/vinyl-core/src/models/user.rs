//! User, profile and per-user aggregate models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::AlbumRef;

/// A registered user. The password hash never leaves the store layer except
/// through [`UserCredentials`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
}

/// A user row including the stored password hash, used for authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub id: u64,
    pub username: String,
    pub password_hash: String,
}

impl From<UserCredentials> for User {
    fn from(creds: UserCredentials) -> Self {
        User {
            id: creds.id,
            username: creds.username,
        }
    }
}

/// A user joined with the optional profile extension.
///
/// Every profile field is `None` until the user saves a profile for the
/// first time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: u64,
    pub username: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
    pub favorite_genre_id: Option<u64>,
    /// Name of the favorite genre
    pub favorite_genre: Option<String>,
    pub joined_date: Option<Timestamp>,
}

/// Aggregates over the albums a user owns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct UserStats {
    /// Number of albums the user has added
    pub album_count: u64,
    /// Reviews written by anyone on the user's albums
    pub review_count: u64,
    /// Average stars across those reviews, one decimal, 0 without reviews
    pub average_rating: f64,
}

/// A review in a user's activity feed, with the reviewed album's title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityReview {
    pub id: u64,
    pub stars: u8,
    pub text: String,
    pub created_at: Timestamp,
    pub album_id: u64,
    pub album_title: String,
}

/// Most recent albums added and reviews written by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserActivity {
    pub recent_albums: Vec<AlbumRef>,
    pub recent_reviews: Vec<ActivityReview>,
}
