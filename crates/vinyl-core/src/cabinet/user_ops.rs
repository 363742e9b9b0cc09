//! Account and profile operations for the Cabinet.

use log::{debug, info};

use super::Cabinet;
use crate::{
    auth,
    error::Result,
    models::{Outcome, User, UserActivity, UserProfile},
    params::{Credentials, Id, RegisterUser, UpdateProfile},
};

impl Cabinet {
    /// Registers a user, hashing the password before it reaches the store.
    /// A taken username is a failed outcome.
    pub async fn register_user(&self, params: &RegisterUser) -> Result<Outcome<u64>> {
        let username = params.username.trim().to_string();
        let password = params.password.clone();
        self.with_database(move |db| {
            let hash = auth::hash_password(&password)?;
            db.create_user(&username, &hash)
        })
        .await
    }

    /// Checks a username and password. Returns the user on a match and
    /// `None` for an unknown user or a wrong password.
    pub async fn authenticate(&self, params: &Credentials) -> Result<Option<User>> {
        let username = params.username.trim().to_string();
        let password = params.password.clone();
        self.with_database(move |db| {
            let Some(creds) = db.get_user_by_username(&username)? else {
                debug!("login for unknown user {username}");
                return Ok(None);
            };
            if auth::verify_password(&password, &creds.password_hash)? {
                info!("user {} logged in", creds.id);
                Ok(Some(User::from(creds)))
            } else {
                debug!("wrong password for user {}", creds.id);
                Ok(None)
            }
        })
        .await
    }

    pub async fn get_user(&self, params: &Id) -> Result<Option<User>> {
        let user_id = params.id;
        self.with_database(move |db| db.get_user(user_id)).await
    }

    /// A user with their profile fields, `None` if the user does not exist.
    pub async fn user_profile(&self, params: &Id) -> Result<Option<UserProfile>> {
        let user_id = params.id;
        self.with_database(move |db| db.get_user_profile(user_id)).await
    }

    /// Saves the profile, creating it on first use.
    pub async fn update_profile(&self, params: &UpdateProfile) -> Result<Outcome> {
        let params = params.clone();
        self.with_database(move |db| {
            db.update_user_profile(
                params.user_id,
                params.bio.as_deref(),
                params.location.as_deref(),
                params.profile_image_url.as_deref(),
                params.favorite_genre_id,
            )
        })
        .await
    }

    /// Recent albums added and reviews written by the user.
    pub async fn user_activity(&self, params: &Id) -> Result<UserActivity> {
        let user_id = params.id;
        self.with_database(move |db| db.get_user_activity(user_id)).await
    }
}
