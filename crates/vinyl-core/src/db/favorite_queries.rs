//! Favorite toggling. Presence of a (user, album) row means favorited.

use log::warn;
use rusqlite::params;

use super::executor::execute_on;
use crate::{
    error::{CabinetError, DatabaseResultExt, Result, is_constraint_violation},
    models::Outcome,
};

const INSERT_FAVORITE_SQL: &str = "INSERT INTO favorites (user_id, album_id) VALUES (?1, ?2)";
const DELETE_FAVORITE_SQL: &str = "DELETE FROM favorites WHERE user_id = ?1 AND album_id = ?2";
const CHECK_FAVORITE_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = ?1 AND album_id = ?2)";

const ALREADY_FAVORITE_MESSAGE: &str = "Album is already in your favorites.";

impl super::Database {
    /// Marks an album as a favorite of `user_id`.
    ///
    /// An existing favorite, or an unknown user or album, is a failed
    /// outcome.
    pub fn add_favorite(&self, user_id: u64, album_id: u64) -> Result<Outcome> {
        match execute_on(
            &self.connection,
            INSERT_FAVORITE_SQL,
            params![user_id as i64, album_id as i64],
        ) {
            Ok(_) => Ok(Outcome::success((), "Album added to favorites.")),
            Err(e) if is_constraint_violation(&e) => {
                warn!("favorite insert rejected: {e}");
                let message = if self.is_favorite(user_id, album_id)? {
                    ALREADY_FAVORITE_MESSAGE.to_string()
                } else {
                    e.to_string()
                };
                Ok(Outcome::failure(message))
            }
            Err(e) => Err(CabinetError::database("Failed to insert favorite").with_source(e)),
        }
    }

    /// Removes a favorite. Returns whether a row was removed.
    pub fn remove_favorite(&self, user_id: u64, album_id: u64) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_FAVORITE_SQL, params![user_id as i64, album_id as i64])
            .db_context("Failed to delete favorite")?;
        Ok(removed > 0)
    }

    /// Flips the favorite state and returns the new state.
    pub fn toggle_favorite(&mut self, user_id: u64, album_id: u64) -> Result<Outcome<bool>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let removed = tx
            .execute(DELETE_FAVORITE_SQL, params![user_id as i64, album_id as i64])
            .db_context("Failed to delete favorite")?;

        if removed > 0 {
            tx.commit().db_context("Failed to commit transaction")?;
            return Ok(Outcome::success(false, "Album removed from favorites."));
        }

        match execute_on(
            &tx,
            INSERT_FAVORITE_SQL,
            params![user_id as i64, album_id as i64],
        ) {
            Ok(_) => {
                tx.commit().db_context("Failed to commit transaction")?;
                Ok(Outcome::success(true, "Album added to favorites."))
            }
            Err(e) if is_constraint_violation(&e) => {
                warn!("favorite toggle rejected: {e}");
                Ok(Outcome::failure(e.to_string()))
            }
            Err(e) => Err(CabinetError::database("Failed to insert favorite").with_source(e)),
        }
    }

    /// Returns whether `user_id` has favorited `album_id`.
    pub fn is_favorite(&self, user_id: u64, album_id: u64) -> Result<bool> {
        self.connection
            .query_row(
                CHECK_FAVORITE_SQL,
                params![user_id as i64, album_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check favorite")
    }
}
