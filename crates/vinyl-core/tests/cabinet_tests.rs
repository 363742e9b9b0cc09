mod common;

use vinyl_core::{
    AverageRating, OperationStatus,
    params::{
        CreateAlbum, CreateGenre, CreateReview, Id, RegisterUser, SearchAlbums, SetAlbumGenres,
        UserAlbum,
    },
    validation::{AlbumForm, validate_album_fields},
};

use common::create_test_cabinet;

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_collection_workflow() {
    let (_temp_dir, cabinet) = create_test_cabinet().await;

    let alice = cabinet
        .register_user(&RegisterUser {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .expect("Failed to register")
        .into_value()
        .expect("Username should be free");
    let bob = cabinet
        .register_user(&RegisterUser {
            username: "bob".to_string(),
            password: "swordfish".to_string(),
        })
        .await
        .expect("Failed to register")
        .into_value()
        .expect("Username should be free");

    let mut genre_ids = Vec::new();
    for name in ["Rock", "Folk", "Jazz"] {
        let id = cabinet
            .add_genre(&CreateGenre {
                name: name.to_string(),
            })
            .await
            .expect("Failed to add genre")
            .into_value()
            .expect("Genre should be new");
        genre_ids.push(id);
    }
    let (rock, folk, jazz) = (genre_ids[0], genre_ids[1], genre_ids[2]);

    // Form validation happens before the cabinet is called
    let form = AlbumForm {
        title: "Harvest".to_string(),
        artist: "Neil Young".to_string(),
        year: "1972".to_string(),
        genre_ids: vec![rock, folk],
    };
    assert!(validate_album_fields(&form).is_empty());

    let outcome = cabinet
        .add_album(&CreateAlbum {
            title: form.title.clone(),
            artist: form.artist.clone(),
            year: form.year_value().expect("validated year"),
            genre_ids: form.genre_ids.clone(),
            owner_id: alice,
            image_url: Some(String::new()),
        })
        .await
        .expect("Failed to add album");
    assert_eq!(
        OperationStatus::from(&outcome).to_string(),
        "Success: Album added successfully.\n"
    );
    let album_id = outcome.into_value().expect("album id");

    let album = cabinet
        .get_album(&Id { id: album_id })
        .await
        .expect("Failed to get album")
        .expect("Album should exist");
    assert_eq!(album.genre_names(), vec!["Folk", "Rock"]);
    // An empty cover URL is stored as no image
    assert!(album.image_url.is_none());

    cabinet
        .set_album_genres(&SetAlbumGenres {
            album_id,
            genre_ids: vec![folk, jazz],
        })
        .await
        .expect("Failed to set genres");
    let genres = cabinet
        .album_genres(&Id { id: album_id })
        .await
        .expect("Failed to get genres");
    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Folk", "Jazz"]);

    cabinet
        .toggle_favorite(&UserAlbum {
            user_id: bob,
            album_id,
        })
        .await
        .expect("Failed to toggle favorite");
    cabinet
        .add_review(&CreateReview {
            album_id,
            user_id: bob,
            stars: 5,
            text: "Heart of gold.".to_string(),
        })
        .await
        .expect("Failed to review");

    let results = cabinet
        .search_albums(&SearchAlbums {
            query: "folk 1972".to_string(),
            user_id: Some(bob),
        })
        .await
        .expect("Failed to search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].is_favorite, Some(true));

    let details = cabinet
        .get_album_details(&Id { id: album_id }, None)
        .await
        .expect("Failed to load details")
        .expect("Album should exist");
    assert_eq!(details.average_rating, AverageRating::Rated(5.0));
    assert!(!details.viewer_has_reviewed);
    assert!(details.album.is_favorite.is_none());

    let activity = cabinet
        .user_activity(&Id { id: bob })
        .await
        .expect("Failed to load activity");
    assert_eq!(activity.recent_reviews.len(), 1);
    assert_eq!(activity.recent_reviews[0].album_title, "Harvest");

    cabinet
        .delete_album(&Id { id: album_id })
        .await
        .expect("Failed to delete");
    assert!(
        cabinet
            .user_favorites(&Id { id: bob })
            .await
            .expect("Failed to list favorites")
            .is_empty()
    );
    assert_eq!(
        cabinet
            .album_average_rating(&Id { id: album_id })
            .await
            .expect("Failed to load rating"),
        AverageRating::NoReviews
    );
}

#[tokio::test]
async fn test_cabinet_reopens_existing_database() {
    let (temp_dir, cabinet) = create_test_cabinet().await;
    cabinet
        .add_genre(&CreateGenre {
            name: "Dub".to_string(),
        })
        .await
        .expect("Failed to add genre");

    let reopened = vinyl_core::CabinetBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to reopen");
    let genres = reopened.list_genres().await.expect("Failed to list");
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].name, "Dub");
}
