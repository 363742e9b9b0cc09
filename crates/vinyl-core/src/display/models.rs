//! Display implementations for domain models.
//!
//! All output is markdown: albums and profiles get a heading and a metadata
//! list, reviews a star line followed by the text.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{
    Album, AlbumDetails, AverageRating, Genre, Review, UserActivity, UserProfile, UserStats,
};

/// Renders a rating as filled and empty stars, e.g. `★★★☆☆`.
fn star_bar(stars: u8) -> String {
    let filled = usize::from(stars.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageRating::NoReviews => f.write_str("No reviews"),
            AverageRating::Rated(value) => write!(f, "{value:.1} / 5"),
        }
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_favorite == Some(true) { " ♥" } else { "" };
        writeln!(f, "## {} (ID: {}){marker}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Artist**: {}", self.artist)?;
        writeln!(f, "- **Year**: {}", self.year)?;
        if !self.genres.is_empty() {
            writeln!(f, "- **Genres**: {}", self.genre_names().join(", "))?;
        }
        writeln!(f, "- **Added by**: {}", self.owner_username)?;
        if let Some(url) = &self.image_url {
            writeln!(f, "- **Cover**: {url}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} {} ({})",
            star_bar(self.stars),
            self.username,
            LocalDateTime(&self.created_at)
        )?;
        writeln!(f)?;
        if !self.text.is_empty() {
            writeln!(f, "{}", self.text)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for AlbumDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.album)?;
        writeln!(f, "- **Rating**: {}", self.average_rating)?;
        writeln!(f)?;
        writeln!(f, "## Reviews")?;
        writeln!(f)?;
        if self.reviews.is_empty() {
            writeln!(f, "No reviews yet.")?;
        }
        for review in &self.reviews {
            write!(f, "{review}")?;
        }
        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.username)?;
        writeln!(f)?;
        if let Some(location) = &self.location {
            writeln!(f, "- **Location**: {location}")?;
        }
        if let Some(genre) = &self.favorite_genre {
            writeln!(f, "- **Favorite genre**: {genre}")?;
        }
        if let Some(url) = &self.profile_image_url {
            writeln!(f, "- **Picture**: {url}")?;
        }
        if let Some(joined) = &self.joined_date {
            writeln!(f, "- **Joined**: {}", LocalDate(joined))?;
        }
        if let Some(bio) = &self.bio {
            writeln!(f)?;
            writeln!(f, "{bio}")?;
        }
        Ok(())
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Stats")?;
        writeln!(f)?;
        writeln!(f, "- **Albums**: {}", self.album_count)?;
        writeln!(f, "- **Reviews received**: {}", self.review_count)?;
        writeln!(f, "- **Average rating**: {:.1}", self.average_rating)
    }
}

impl fmt::Display for UserActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Recent albums")?;
        writeln!(f)?;
        if self.recent_albums.is_empty() {
            writeln!(f, "Nothing added yet.")?;
        }
        for album in &self.recent_albums {
            writeln!(f, "- {} by {} (ID: {})", album.title, album.artist, album.id)?;
        }
        writeln!(f)?;

        writeln!(f, "## Recent reviews")?;
        writeln!(f)?;
        if self.recent_reviews.is_empty() {
            writeln!(f, "No reviews written yet.")?;
        }
        for review in &self.recent_reviews {
            writeln!(
                f,
                "- {} {} (ID: {})",
                star_bar(review.stars),
                review.album_title,
                review.album_id
            )?;
        }
        Ok(())
    }
}
