//! Album operations for the Cabinet.

use super::Cabinet;
use crate::{
    error::Result,
    models::{Album, AlbumDetails, Outcome, UserStats},
    params::{CreateAlbum, Id, SearchAlbums, SetAlbumGenres, UpdateAlbum},
};

impl Cabinet {
    /// Adds an album and its genre associations atomically.
    pub async fn add_album(&self, params: &CreateAlbum) -> Result<Outcome<u64>> {
        let params = params.clone();
        self.with_database(move |db| {
            db.add_album(
                &params.title,
                &params.artist,
                params.year,
                &params.genre_ids,
                params.owner_id,
                params.image_url.as_deref(),
            )
        })
        .await
    }

    /// Overwrites an album's fields and replaces its genre set atomically.
    pub async fn update_album(&self, params: &UpdateAlbum) -> Result<Outcome> {
        let params = params.clone();
        self.with_database(move |db| {
            db.update_album(
                params.id,
                &params.title,
                &params.artist,
                params.year,
                &params.genre_ids,
                params.image_url.as_deref(),
            )
        })
        .await
    }

    /// Replaces the genre set of an album.
    pub async fn set_album_genres(&self, params: &SetAlbumGenres) -> Result<Outcome> {
        let params = params.clone();
        self.with_database(move |db| db.set_album_genres(params.album_id, &params.genre_ids)).await
    }

    /// Deletes an album; its genres, favorites and reviews cascade.
    pub async fn delete_album(&self, params: &Id) -> Result<()> {
        let album_id = params.id;
        self.with_database(move |db| db.delete_album(album_id)).await
    }

    /// Retrieves an album by its ID.
    pub async fn get_album(&self, params: &Id) -> Result<Option<Album>> {
        let album_id = params.id;
        self.with_database(move |db| db.get_album_by_id(album_id)).await
    }

    /// Retrieves an album with reviews and rating as seen by `viewer`.
    pub async fn get_album_details(
        &self,
        params: &Id,
        viewer: Option<u64>,
    ) -> Result<Option<AlbumDetails>> {
        let album_id = params.id;
        self.with_database(move |db| db.get_album_details(album_id, viewer)).await
    }

    /// Lists every album.
    pub async fn list_albums(&self) -> Result<Vec<Album>> {
        self.with_database(|db| db.get_all_albums()).await
    }

    /// Lists the albums owned by a user.
    pub async fn user_albums(&self, params: &Id) -> Result<Vec<Album>> {
        let owner_id = params.id;
        self.with_database(move |db| db.get_user_albums(owner_id)).await
    }

    /// Searches albums; blank text yields no albums.
    pub async fn search_albums(&self, params: &SearchAlbums) -> Result<Vec<Album>> {
        let params = params.clone();
        self.with_database(move |db| db.search_albums(&params.query, params.user_id)).await
    }

    /// The browse view: searches when the query has text, otherwise lists
    /// every album.
    pub async fn browse_albums(&self, params: &SearchAlbums) -> Result<Vec<Album>> {
        if params.query.trim().is_empty() {
            self.list_albums().await
        } else {
            self.search_albums(params).await
        }
    }

    /// Album and review aggregates for a user's own albums.
    pub async fn user_stats(&self, params: &Id) -> Result<UserStats> {
        let user_id = params.id;
        self.with_database(move |db| db.get_user_stats(user_id)).await
    }
}
