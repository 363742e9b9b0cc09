//! Review model and rating aggregates.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Lowest accepted star rating.
pub const MIN_STARS: u8 = 1;
/// Highest accepted star rating.
pub const MAX_STARS: u8 = 5;

/// A single user's review of an album.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique identifier for the review
    pub id: u64,

    /// Reviewed album
    pub album_id: u64,

    /// Reviewing user
    pub user_id: u64,

    /// Username of the reviewer
    pub username: String,

    /// Star rating, 1 to 5 inclusive
    pub stars: u8,

    /// Free-text body (may be empty)
    pub text: String,

    /// Timestamp when the review was written (UTC)
    pub created_at: Timestamp,
}

/// Average star rating of an album.
///
/// `NoReviews` is distinct from a rating of zero, which can never occur since
/// the lowest rating is one star.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AverageRating {
    NoReviews,
    Rated(f64),
}

impl AverageRating {
    /// Builds the rating from a raw SQL `AVG`, rounding to one decimal.
    pub fn from_average(avg: Option<f64>) -> Self {
        match avg {
            Some(avg) => AverageRating::Rated(round_to_tenth(avg)),
            None => AverageRating::NoReviews,
        }
    }

    /// The rounded average, if any review exists.
    pub fn value(&self) -> Option<f64> {
        match self {
            AverageRating::Rated(v) => Some(*v),
            AverageRating::NoReviews => None,
        }
    }
}

/// Rounds to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Returns true when `stars` is an accepted rating.
pub fn stars_in_range(stars: i64) -> bool {
    (i64::from(MIN_STARS)..=i64::from(MAX_STARS)).contains(&stars)
}
