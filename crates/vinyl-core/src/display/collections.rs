//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::{Album, Genre, Review};

/// Newtype wrapper for displaying album listings.
///
/// ```rust
/// use vinyl_core::{display::Albums, models::Album};
///
/// let album = Album {
///     id: 4,
///     title: "Blue".to_string(),
///     artist: "Joni Mitchell".to_string(),
///     year: 1971,
///     image_url: None,
///     owner_id: 1,
///     owner_username: "alice".to_string(),
///     genres: vec![],
///     is_favorite: Some(true),
/// };
/// let output = Albums(vec![album]).to_string();
/// assert!(output.contains("## Blue (ID: 4)"));
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Albums(pub Vec<Album>);

impl Albums {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Album> {
        self.0.iter()
    }
}

impl Index<usize> for Albums {
    type Output = Album;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Albums {
    type Item = Album;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Albums {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No albums found.")
        } else {
            for album in &self.0 {
                write!(f, "{album}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the reviews of an album.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Reviews(pub Vec<Review>);

impl Reviews {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Reviews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No reviews yet.")
        } else {
            for review in &self.0 {
                write!(f, "{review}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for the genre reference list.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Genres(pub Vec<Genre>);

impl fmt::Display for Genres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No genres found.");
        }
        for genre in &self.0 {
            writeln!(f, "- {} (ID: {})", genre.name, genre.id)?;
        }
        Ok(())
    }
}
