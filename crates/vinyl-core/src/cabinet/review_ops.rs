//! Review operations for the Cabinet.

use super::Cabinet;
use crate::{
    error::Result,
    models::{AverageRating, Outcome, Review},
    params::{CreateReview, Id, UserAlbum},
};

impl Cabinet {
    /// Records a review; a second review of the same album by the same user
    /// is a failed outcome.
    pub async fn add_review(&self, params: &CreateReview) -> Result<Outcome<u64>> {
        let params = params.clone();
        self.with_database(move |db| {
            db.add_review(params.album_id, params.user_id, params.stars, &params.text)
        })
        .await
    }

    /// Lists an album's reviews, newest first.
    pub async fn album_reviews(&self, params: &Id) -> Result<Vec<Review>> {
        let album_id = params.id;
        self.with_database(move |db| db.get_album_reviews(album_id)).await
    }

    pub async fn album_average_rating(&self, params: &Id) -> Result<AverageRating> {
        let album_id = params.id;
        self.with_database(move |db| db.get_album_average_rating(album_id)).await
    }

    /// Returns whether the user already reviewed the album.
    pub async fn has_user_reviewed(&self, params: &UserAlbum) -> Result<bool> {
        let UserAlbum { user_id, album_id } = *params;
        self.with_database(move |db| db.has_user_reviewed(album_id, Some(user_id))).await
    }
}
