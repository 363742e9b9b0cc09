//! Genre operations for the Cabinet.

use super::Cabinet;
use crate::{
    error::Result,
    models::{Genre, Outcome},
    params::{CreateGenre, Id},
};

impl Cabinet {
    /// Lists every genre alphabetically.
    pub async fn list_genres(&self) -> Result<Vec<Genre>> {
        self.with_database(|db| db.list_all_genres()).await
    }

    /// Lists an album's genres alphabetically.
    pub async fn album_genres(&self, params: &Id) -> Result<Vec<Genre>> {
        let album_id = params.id;
        self.with_database(move |db| db.get_album_genres(album_id)).await
    }

    /// Adds a genre to the reference list.
    pub async fn add_genre(&self, params: &CreateGenre) -> Result<Outcome<u64>> {
        let name = params.name.trim().to_string();
        self.with_database(move |db| db.add_genre(&name)).await
    }
}
