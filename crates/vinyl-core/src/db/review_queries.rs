//! Review writes and per-album rating aggregates.

use log::{debug, warn};
use rusqlite::{Row, params};

use super::executor::{execute_on, fetch_all, get_id, get_timestamp, now_string};
use crate::{
    error::{CabinetError, DatabaseResultExt, Result, is_constraint_violation},
    models::{AverageRating, MAX_STARS, MIN_STARS, Outcome, Review, stars_in_range},
};

const INSERT_REVIEW_SQL: &str =
    "INSERT INTO reviews (album_id, user_id, stars, text, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_ALBUM_REVIEWS_SQL: &str = "SELECT r.id, r.album_id, r.user_id, u.username, \
     r.stars, r.text, r.created_at FROM reviews r JOIN users u ON r.user_id = u.id \
     WHERE r.album_id = ?1 ORDER BY r.created_at DESC, r.id DESC";
const SELECT_AVERAGE_RATING_SQL: &str = "SELECT AVG(stars) FROM reviews WHERE album_id = ?1";
const CHECK_REVIEWED_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM reviews WHERE album_id = ?1 AND user_id = ?2)";

const ALREADY_REVIEWED_MESSAGE: &str = "You have already reviewed this album.";

impl super::Database {
    fn build_review_from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
        Ok(Review {
            id: get_id(row, 0)?,
            album_id: get_id(row, 1)?,
            user_id: get_id(row, 2)?,
            username: row.get(3)?,
            stars: row.get(4)?,
            text: row.get(5)?,
            created_at: get_timestamp(row, 6)?,
        })
    }

    /// Records a review of `album_id` by `user_id`.
    ///
    /// A rating outside 1..=5 is rejected without touching the store. A
    /// second review by the same user is a failed outcome.
    pub fn add_review(
        &self,
        album_id: u64,
        user_id: u64,
        stars: u8,
        text: &str,
    ) -> Result<Outcome<u64>> {
        if !stars_in_range(i64::from(stars)) {
            return Ok(Outcome::failure(format!(
                "Rating must be between {MIN_STARS} and {MAX_STARS} stars."
            )));
        }

        match execute_on(
            &self.connection,
            INSERT_REVIEW_SQL,
            params![album_id as i64, user_id as i64, stars, text, now_string()],
        ) {
            Ok(id) => {
                debug!("user {user_id} reviewed album {album_id}");
                Ok(Outcome::success(id as u64, "Review added successfully."))
            }
            Err(e) if is_constraint_violation(&e) => {
                warn!("review insert rejected: {e}");
                let message = if self.has_user_reviewed(album_id, Some(user_id))? {
                    ALREADY_REVIEWED_MESSAGE.to_string()
                } else {
                    e.to_string()
                };
                Ok(Outcome::failure(message))
            }
            Err(e) => Err(CabinetError::database("Failed to insert review").with_source(e)),
        }
    }

    /// Lists the reviews of an album, newest first, with reviewer usernames.
    pub fn get_album_reviews(&self, album_id: u64) -> Result<Vec<Review>> {
        fetch_all(
            &self.connection,
            SELECT_ALBUM_REVIEWS_SQL,
            params![album_id as i64],
            Self::build_review_from_row,
        )
        .db_context("Failed to query reviews")
    }

    /// Average stars of an album rounded to one decimal, or
    /// [`AverageRating::NoReviews`].
    pub fn get_album_average_rating(&self, album_id: u64) -> Result<AverageRating> {
        let avg: Option<f64> = self
            .connection
            .query_row(SELECT_AVERAGE_RATING_SQL, params![album_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to query average rating")?;
        Ok(AverageRating::from_average(avg))
    }

    /// Returns whether `user_id` has reviewed `album_id`; always false for an
    /// anonymous caller.
    pub fn has_user_reviewed(&self, album_id: u64, user_id: Option<u64>) -> Result<bool> {
        let Some(user_id) = user_id else {
            return Ok(false);
        };
        self.connection
            .query_row(
                CHECK_REVIEWED_SQL,
                params![album_id as i64, user_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check review")
    }
}
