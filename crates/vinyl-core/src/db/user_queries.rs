//! User accounts, profiles and activity feeds.

use log::{debug, warn};
use rusqlite::params;

use super::executor::{execute_on, fetch_all, fetch_optional, get_id, get_timestamp, now_string};
use crate::{
    error::{CabinetError, DatabaseResultExt, Result, is_constraint_violation},
    models::{ActivityReview, AlbumRef, Outcome, User, UserActivity, UserCredentials, UserProfile},
};

const INSERT_USER_SQL: &str = "INSERT INTO users (username, password_hash) VALUES (?1, ?2)";
const SELECT_USER_SQL: &str = "SELECT id, username FROM users WHERE id = ?1";
const SELECT_CREDENTIALS_SQL: &str =
    "SELECT id, username, password_hash FROM users WHERE username = ?1";
const SELECT_PROFILE_SQL: &str = "SELECT u.id, u.username, up.bio, up.location, \
     up.profile_image_url, up.favorite_genre_id, g.name, up.joined_date \
     FROM users u \
     LEFT JOIN user_profiles up ON u.id = up.user_id \
     LEFT JOIN genres g ON up.favorite_genre_id = g.id \
     WHERE u.id = ?1";
const UPSERT_PROFILE_SQL: &str = "INSERT INTO user_profiles \
     (user_id, bio, location, profile_image_url, favorite_genre_id, joined_date) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
     ON CONFLICT(user_id) DO UPDATE SET bio = excluded.bio, \
     location = excluded.location, profile_image_url = excluded.profile_image_url, \
     favorite_genre_id = excluded.favorite_genre_id";
const RECENT_ALBUMS_SQL: &str =
    "SELECT id, title, artist FROM albums WHERE user_id = ?1 ORDER BY id DESC LIMIT ?2";
const RECENT_REVIEWS_SQL: &str = "SELECT r.id, r.stars, r.text, r.created_at, a.title, a.id \
     FROM reviews r JOIN albums a ON r.album_id = a.id \
     WHERE r.user_id = ?1 ORDER BY r.created_at DESC, r.id DESC LIMIT ?2";

/// Number of entries in each activity list.
pub const ACTIVITY_LIMIT: i64 = 5;

impl super::Database {
    /// Stores a new user with an already-hashed password. A taken username is
    /// a failed outcome.
    pub fn create_user(&self, username: &str, password_hash: &str) -> Result<Outcome<u64>> {
        match execute_on(
            &self.connection,
            INSERT_USER_SQL,
            params![username, password_hash],
        ) {
            Ok(id) => {
                debug!("registered user {id}");
                Ok(Outcome::success(id as u64, "Account created successfully."))
            }
            Err(e) if is_constraint_violation(&e) => {
                warn!("user insert rejected: {e}");
                Ok(Outcome::failure("Username is already taken."))
            }
            Err(e) => Err(CabinetError::database("Failed to insert user").with_source(e)),
        }
    }

    /// Retrieves a user by ID.
    pub fn get_user(&self, id: u64) -> Result<Option<User>> {
        fetch_optional(&self.connection, SELECT_USER_SQL, params![id as i64], |row| {
            Ok(User {
                id: get_id(row, 0)?,
                username: row.get(1)?,
            })
        })
        .db_context("Failed to query user")
    }

    /// Retrieves a user with the stored password hash, for authentication.
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserCredentials>> {
        fetch_optional(&self.connection, SELECT_CREDENTIALS_SQL, params![username], |row| {
            Ok(UserCredentials {
                id: get_id(row, 0)?,
                username: row.get(1)?,
                password_hash: row.get(2)?,
            })
        })
        .db_context("Failed to query user")
    }

    /// A user joined with their optional profile. `None` if the user does not
    /// exist.
    pub fn get_user_profile(&self, user_id: u64) -> Result<Option<UserProfile>> {
        fetch_optional(&self.connection, SELECT_PROFILE_SQL, params![user_id as i64], |row| {
            let joined_date = match row.get::<_, Option<String>>(7)? {
                Some(_) => Some(get_timestamp(row, 7)?),
                None => None,
            };
            Ok(UserProfile {
                user_id: get_id(row, 0)?,
                username: row.get(1)?,
                bio: row.get(2)?,
                location: row.get(3)?,
                profile_image_url: row.get(4)?,
                favorite_genre_id: row.get::<_, Option<i64>>(5)?.map(|id| id as u64),
                favorite_genre: row.get(6)?,
                joined_date,
            })
        })
        .db_context("Failed to query user profile")
    }

    /// Creates or updates the profile of `user_id`. The joined date is set on
    /// first save and kept afterwards.
    pub fn update_user_profile(
        &self,
        user_id: u64,
        bio: Option<&str>,
        location: Option<&str>,
        profile_image_url: Option<&str>,
        favorite_genre_id: Option<u64>,
    ) -> Result<Outcome> {
        match execute_on(
            &self.connection,
            UPSERT_PROFILE_SQL,
            params![
                user_id as i64,
                bio,
                location,
                profile_image_url,
                favorite_genre_id.map(|id| id as i64),
                now_string()
            ],
        ) {
            Ok(_) => Ok(Outcome::success((), "Profile updated successfully.")),
            Err(e) if is_constraint_violation(&e) => {
                warn!("profile update rejected: {e}");
                Ok(Outcome::failure(e.to_string()))
            }
            Err(e) => Err(CabinetError::database("Failed to save profile").with_source(e)),
        }
    }

    /// The most recent albums added and reviews written by `user_id`.
    pub fn get_user_activity(&self, user_id: u64) -> Result<UserActivity> {
        let recent_albums = fetch_all(
            &self.connection,
            RECENT_ALBUMS_SQL,
            params![user_id as i64, ACTIVITY_LIMIT],
            |row| {
                Ok(AlbumRef {
                    id: get_id(row, 0)?,
                    title: row.get(1)?,
                    artist: row.get(2)?,
                })
            },
        )
        .db_context("Failed to query recent albums")?;

        let recent_reviews = fetch_all(
            &self.connection,
            RECENT_REVIEWS_SQL,
            params![user_id as i64, ACTIVITY_LIMIT],
            |row| {
                Ok(ActivityReview {
                    id: get_id(row, 0)?,
                    stars: row.get(1)?,
                    text: row.get(2)?,
                    created_at: get_timestamp(row, 3)?,
                    album_title: row.get(4)?,
                    album_id: get_id(row, 5)?,
                })
            },
        )
        .db_context("Failed to query recent reviews")?;

        Ok(UserActivity {
            recent_albums,
            recent_reviews,
        })
    }
}
