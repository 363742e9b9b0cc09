//! Favorite operations for the Cabinet.

use super::Cabinet;
use crate::{
    error::Result,
    models::{Album, Outcome},
    params::{Id, UserAlbum},
};

impl Cabinet {
    /// Marks an album as a favorite.
    pub async fn add_favorite(&self, params: &UserAlbum) -> Result<Outcome> {
        let UserAlbum { user_id, album_id } = *params;
        self.with_database(move |db| db.add_favorite(user_id, album_id)).await
    }

    /// Removes a favorite; returns whether one existed.
    pub async fn remove_favorite(&self, params: &UserAlbum) -> Result<bool> {
        let UserAlbum { user_id, album_id } = *params;
        self.with_database(move |db| db.remove_favorite(user_id, album_id)).await
    }

    /// Flips the favorite state; the outcome value is the new state.
    pub async fn toggle_favorite(&self, params: &UserAlbum) -> Result<Outcome<bool>> {
        let UserAlbum { user_id, album_id } = *params;
        self.with_database(move |db| db.toggle_favorite(user_id, album_id)).await
    }

    /// Returns whether the user has favorited the album.
    pub async fn is_favorite(&self, params: &UserAlbum) -> Result<bool> {
        let UserAlbum { user_id, album_id } = *params;
        self.with_database(move |db| db.is_favorite(user_id, album_id)).await
    }

    /// Lists the albums a user has favorited.
    pub async fn user_favorites(&self, params: &Id) -> Result<Vec<Album>> {
        let user_id = params.id;
        self.with_database(move |db| db.get_user_favorites(user_id)).await
    }
}
