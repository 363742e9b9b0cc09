use rusqlite::{params, types::Value};
use tempfile::NamedTempFile;
use vinyl_core::{AverageRating, Database, models::UserStats};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn add_user(db: &Database, username: &str) -> u64 {
    db.create_user(username, "$argon2id$stub")
        .expect("Failed to create user")
        .into_value()
        .expect("Username should be free")
}

fn add_genre(db: &Database, name: &str) -> u64 {
    db.add_genre(name)
        .expect("Failed to add genre")
        .into_value()
        .expect("Genre should be new")
}

fn add_album(db: &mut Database, owner: u64, title: &str, year: i64, genres: &[u64]) -> u64 {
    db.add_album(title, "Some Artist", year, genres, owner, None)
        .expect("Failed to add album")
        .into_value()
        .expect("Album should be added")
}

fn count(db: &Database, table: &str, album_id: u64) -> i64 {
    let rows = db
        .fetch(
            &format!("SELECT COUNT(*) AS n FROM {table} WHERE album_id = ?1"),
            params![album_id as i64],
        )
        .expect("Failed to count rows");
    match rows[0]["n"] {
        Value::Integer(n) => n,
        ref other => panic!("unexpected count value {other:?}"),
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert!(db.list_all_genres().expect("Failed to list genres").is_empty());
}

#[test]
fn test_execute_and_fetch_primitives() {
    let (_temp_file, db) = create_test_db();

    let first = db
        .execute("INSERT INTO genres (name) VALUES (?1)", params!["Jazz"])
        .expect("Failed to insert");
    let second = db
        .execute("INSERT INTO genres (name) VALUES (?1)", params!["Blues"])
        .expect("Failed to insert");
    assert_eq!(second, first + 1);

    let rows = db
        .fetch("SELECT id, name FROM genres ORDER BY id", [])
        .expect("Failed to fetch");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], Value::Text("Jazz".to_string()));
    assert_eq!(rows[1]["id"], Value::Integer(second));

    // Parameters are bound, never interpolated
    let hostile = "x'); DROP TABLE genres; --";
    db.execute("INSERT INTO genres (name) VALUES (?1)", params![hostile])
        .expect("Failed to insert");
    let rows = db
        .fetch("SELECT name FROM genres WHERE name = ?1", params![hostile])
        .expect("Failed to fetch");
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_add_then_get_album_matches_input() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    let blues = add_genre(&db, "Blues");

    let outcome = db
        .add_album(
            "Led Zeppelin IV",
            "Led Zeppelin",
            1971,
            &[rock, blues],
            owner,
            Some("http://img/iv.jpg"),
        )
        .expect("Failed to add album");
    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "Album added successfully.");
    let album_id = outcome.into_value().expect("album id");

    let album = db
        .get_album_by_id(album_id)
        .expect("Failed to get album")
        .expect("Album should exist");
    assert_eq!(album.title, "Led Zeppelin IV");
    assert_eq!(album.artist, "Led Zeppelin");
    assert_eq!(album.year, 1971);
    assert_eq!(album.owner_id, owner);
    assert_eq!(album.owner_username, "alice");
    assert_eq!(album.image_url.as_deref(), Some("http://img/iv.jpg"));
    // Alphabetical by name
    assert_eq!(album.genre_names(), vec!["Blues", "Rock"]);
    let mut ids = album.genre_ids();
    ids.sort_unstable();
    let mut expected = vec![rock, blues];
    expected.sort_unstable();
    assert_eq!(ids, expected);
}

#[test]
fn test_get_missing_album_is_none() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_album_by_id(42).expect("Failed to query").is_none());
    assert!(db.get_album_details(42, None).expect("Failed to query").is_none());
}

#[test]
fn test_update_replaces_genre_set() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let a = add_genre(&db, "Ambient");
    let b = add_genre(&db, "Bebop");
    let c = add_genre(&db, "Cumbia");
    let album_id = add_album(&mut db, owner, "Mixed", 1999, &[a, b]);

    let outcome = db
        .update_album(album_id, "Mixed Up", "Other Artist", 2001, &[b, c], None)
        .expect("Failed to update album");
    assert!(outcome.is_success());

    let album = db
        .get_album_by_id(album_id)
        .expect("Failed to get album")
        .expect("Album should exist");
    assert_eq!(album.genre_names(), vec!["Bebop", "Cumbia"]);
    assert_eq!(album.title, "Mixed Up");
    assert_eq!(album.artist, "Other Artist");
    assert_eq!(album.year, 2001);
    assert_eq!(count(&db, "album_genres", album_id), 2);
}

#[test]
fn test_update_missing_album_is_failure() {
    let (_temp_file, mut db) = create_test_db();
    let outcome = db
        .update_album(77, "Nope", "Nobody", 2000, &[], None)
        .expect("Failed to update album");
    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "Album with ID 77 not found.");
}

#[test]
fn test_duplicate_genre_on_insert_rolls_back() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");

    let outcome = db
        .add_album("Twice", "Echo", 1980, &[rock, rock], owner, None)
        .expect("Constraint violations are outcomes, not errors");
    assert!(!outcome.is_success());
    assert!(!outcome.message().is_empty());

    // Album row and partial associations were rolled back together
    assert!(db.get_all_albums().expect("Failed to list").is_empty());
}

#[test]
fn test_failed_update_keeps_previous_genres() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    let album_id = add_album(&mut db, owner, "Stable", 1990, &[rock]);

    let outcome = db
        .update_album(album_id, "Changed", "Echo", 1991, &[9999], None)
        .expect("Constraint violations are outcomes, not errors");
    assert!(!outcome.is_success());

    let album = db
        .get_album_by_id(album_id)
        .expect("Failed to get album")
        .expect("Album should exist");
    assert_eq!(album.title, "Stable");
    assert_eq!(album.genre_names(), vec!["Rock"]);
}

#[test]
fn test_album_with_unknown_owner_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let rock = add_genre(&db, "Rock");
    let outcome = db
        .add_album("Orphan", "Nobody", 2000, &[rock], 404, None)
        .expect("Constraint violations are outcomes, not errors");
    assert!(!outcome.is_success());
}

#[test]
fn test_duplicate_favorite_and_review_are_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    let album_id = add_album(&mut db, owner, "Once", 1975, &[rock]);

    assert!(db.add_favorite(owner, album_id).expect("favorite").is_success());
    let again = db.add_favorite(owner, album_id).expect("favorite");
    assert!(!again.is_success());
    assert_eq!(again.message(), "Album is already in your favorites.");

    assert!(
        db.add_review(album_id, owner, 4, "Good")
            .expect("review")
            .is_success()
    );
    let again = db.add_review(album_id, owner, 5, "Better").expect("review");
    assert!(!again.is_success());
    assert_eq!(again.message(), "You have already reviewed this album.");

    let duplicate_genre = db.add_genre("Rock").expect("genre");
    assert!(!duplicate_genre.is_success());
}

#[test]
fn test_review_stars_out_of_range_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    let album_id = add_album(&mut db, owner, "Rated", 1975, &[rock]);

    for stars in [0, 6] {
        let outcome = db.add_review(album_id, owner, stars, "").expect("review");
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "Rating must be between 1 and 5 stars.");
    }
    assert!(db.get_album_reviews(album_id).expect("reviews").is_empty());
}

#[test]
fn test_search_is_and_across_terms() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    let jazz = add_genre(&db, "Jazz");
    let soul = add_genre(&db, "Soul");

    let matching = add_album(&mut db, owner, "Loud", 1970, &[rock]);
    let rock_title = add_album(&mut db, owner, "Rocket 1970", 1985, &[jazz]);
    add_album(&mut db, owner, "Quiet", 1970, &[jazz]);
    add_album(&mut db, owner, "Other", 1971, &[rock]);
    let multi = add_album(&mut db, owner, "Many", 1970, &[rock, soul]);

    let results = db.search_albums("Rock 1970", None).expect("search");
    let ids: Vec<u64> = results.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![matching, rock_title, multi]);

    // Case-insensitive, every album annotated with its genres
    let results = db.search_albums("rOcK", None).expect("search");
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|a| !a.genres.is_empty()));
    assert!(results.iter().all(|a| a.is_favorite.is_none()));
}

#[test]
fn test_search_terms_may_match_different_genres() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let funk = add_genre(&db, "Funk");
    let soul = add_genre(&db, "Soul");
    let album_id = add_album(&mut db, owner, "Groove", 1972, &[funk, soul]);

    // One row even though "o" and "u" hit both genres
    let results = db.search_albums("funk soul o u", None).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, album_id);
}

#[test]
fn test_search_blank_text_is_empty() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    add_album(&mut db, owner, "Anything", 1970, &[rock]);

    assert!(db.search_albums("", None).expect("search").is_empty());
    assert!(db.search_albums(" \t\n", None).expect("search").is_empty());
}

#[test]
fn test_search_wildcards_are_literal() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    add_album(&mut db, owner, "100% Pure", 1990, &[rock]);
    add_album(&mut db, owner, "Plain", 1991, &[rock]);

    let results = db.search_albums("%", None).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "100% Pure");
    assert!(db.search_albums("_", None).expect("search").is_empty());
}

#[test]
fn test_search_flags_favorites_for_requesting_user() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let fan = add_user(&db, "bob");
    let rock = add_genre(&db, "Rock");
    let liked = add_album(&mut db, owner, "Liked Rock", 1970, &[rock]);
    add_album(&mut db, owner, "Plain Rock", 1970, &[rock]);
    db.add_favorite(fan, liked).expect("favorite");

    let results = db.search_albums("rock", Some(fan)).expect("search");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].is_favorite, Some(true));
    assert_eq!(results[1].is_favorite, Some(false));
}

#[test]
fn test_user_stats() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let critic = add_user(&db, "bob");
    let third = add_user(&db, "carol");

    assert_eq!(
        db.get_user_stats(owner).expect("stats"),
        UserStats {
            album_count: 0,
            review_count: 0,
            average_rating: 0.0
        }
    );

    let rock = add_genre(&db, "Rock");
    let first = add_album(&mut db, owner, "One", 1970, &[rock]);
    let second = add_album(&mut db, owner, "Two", 1971, &[rock]);
    db.add_review(first, critic, 5, "").expect("review");
    db.add_review(first, third, 4, "").expect("review");
    db.add_review(second, critic, 4, "").expect("review");

    let stats = db.get_user_stats(owner).expect("stats");
    assert_eq!(stats.album_count, 2);
    assert_eq!(stats.review_count, 3);
    // 13 / 3 = 4.333..
    assert_eq!(stats.average_rating, 4.3);

    // Reviews the user wrote on other albums do not count
    assert_eq!(db.get_user_stats(critic).expect("stats").review_count, 0);
}

#[test]
fn test_average_rating_sentinel_and_rounding() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let b = add_user(&db, "bob");
    let c = add_user(&db, "carol");
    let rock = add_genre(&db, "Rock");
    let album_id = add_album(&mut db, owner, "Rated", 1970, &[rock]);

    assert_eq!(
        db.get_album_average_rating(album_id).expect("rating"),
        AverageRating::NoReviews
    );

    db.add_review(album_id, owner, 5, "").expect("review");
    db.add_review(album_id, b, 5, "").expect("review");
    db.add_review(album_id, c, 4, "").expect("review");
    // 14 / 3 = 4.666..
    assert_eq!(
        db.get_album_average_rating(album_id).expect("rating"),
        AverageRating::Rated(4.7)
    );
}

#[test]
fn test_reviews_are_newest_first() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let b = add_user(&db, "bob");
    let rock = add_genre(&db, "Rock");
    let album_id = add_album(&mut db, owner, "Reviewed", 1970, &[rock]);

    db.add_review(album_id, owner, 3, "first").expect("review");
    db.add_review(album_id, b, 4, "second").expect("review");

    let reviews = db.get_album_reviews(album_id).expect("reviews");
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].text, "second");
    assert_eq!(reviews[0].username, "bob");
    assert_eq!(reviews[1].text, "first");
}

#[test]
fn test_has_user_reviewed() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    let album_id = add_album(&mut db, owner, "Reviewed", 1970, &[rock]);

    assert!(!db.has_user_reviewed(album_id, None).expect("check"));
    assert!(!db.has_user_reviewed(album_id, Some(owner)).expect("check"));
    db.add_review(album_id, owner, 3, "").expect("review");
    assert!(db.has_user_reviewed(album_id, Some(owner)).expect("check"));
    assert!(!db.has_user_reviewed(album_id, None).expect("check"));
}

#[test]
fn test_delete_album_cascades() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let fan = add_user(&db, "bob");
    let rock = add_genre(&db, "Rock");
    let album_id = add_album(&mut db, owner, "Doomed", 1970, &[rock]);
    db.add_favorite(fan, album_id).expect("favorite");
    db.add_review(album_id, fan, 2, "meh").expect("review");

    db.delete_album(album_id).expect("Failed to delete album");

    assert!(db.get_album_by_id(album_id).expect("query").is_none());
    assert_eq!(count(&db, "album_genres", album_id), 0);
    assert_eq!(count(&db, "favorites", album_id), 0);
    assert_eq!(count(&db, "reviews", album_id), 0);
    assert!(db.get_user_favorites(fan).expect("favorites").is_empty());
    // Genres themselves survive
    assert_eq!(db.list_all_genres().expect("genres").len(), 1);
}

#[test]
fn test_delete_user_cascades_to_albums() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    let album_id = add_album(&mut db, owner, "Owned", 1970, &[rock]);

    db.execute("DELETE FROM users WHERE id = ?1", params![owner as i64])
        .expect("Failed to delete user");

    assert!(db.get_album_by_id(album_id).expect("query").is_none());
    assert_eq!(count(&db, "album_genres", album_id), 0);
}

#[test]
fn test_listings() {
    let (_temp_file, mut db) = create_test_db();
    let alice = add_user(&db, "alice");
    let bob = add_user(&db, "bob");
    let rock = add_genre(&db, "Rock");
    let first = add_album(&mut db, alice, "A", 1970, &[rock]);
    let second = add_album(&mut db, bob, "B", 1971, &[rock]);

    let all = db.get_all_albums().expect("all");
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|a| a.genre_names() == vec!["Rock"]));

    let mine = db.get_user_albums(bob).expect("mine");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, second);
    assert_eq!(mine[0].owner_username, "bob");

    db.add_favorite(bob, first).expect("favorite");
    let favorites = db.get_user_favorites(bob).expect("favorites");
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, first);
    assert_eq!(favorites[0].is_favorite, Some(true));
}

#[test]
fn test_genres_are_alphabetical() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let z = add_genre(&db, "Zydeco");
    let a = add_genre(&db, "Afrobeat");
    let m = add_genre(&db, "Metal");
    let album_id = add_album(&mut db, owner, "Eclectic", 2000, &[z, m]);

    let names: Vec<String> = db
        .list_all_genres()
        .expect("genres")
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Afrobeat", "Metal", "Zydeco"]);

    let album_genres = db.get_album_genres(album_id).expect("genres");
    assert_eq!(album_genres.len(), 2);
    assert_eq!(album_genres[0].name, "Metal");
    assert!(album_genres.iter().all(|g| g.id != a));
}

#[test]
fn test_toggle_favorite() {
    let (_temp_file, mut db) = create_test_db();
    let owner = add_user(&db, "alice");
    let rock = add_genre(&db, "Rock");
    let album_id = add_album(&mut db, owner, "Toggle", 1970, &[rock]);

    let on = db.toggle_favorite(owner, album_id).expect("toggle");
    assert_eq!(on.into_value(), Some(true));
    assert!(db.is_favorite(owner, album_id).expect("check"));

    let off = db.toggle_favorite(owner, album_id).expect("toggle");
    assert_eq!(off.into_value(), Some(false));
    assert!(!db.is_favorite(owner, album_id).expect("check"));
}

#[test]
fn test_profile_upsert_keeps_joined_date() {
    let (_temp_file, db) = create_test_db();
    let user = add_user(&db, "alice");
    let jazz = add_genre(&db, "Jazz");

    let profile = db.get_user_profile(user).expect("profile").expect("user");
    assert_eq!(profile.username, "alice");
    assert!(profile.joined_date.is_none());

    db.update_user_profile(user, Some("Crate digger"), None, None, Some(jazz))
        .expect("update");
    let first = db.get_user_profile(user).expect("profile").expect("user");
    assert_eq!(first.favorite_genre.as_deref(), Some("Jazz"));
    let joined = first.joined_date.expect("joined date");

    db.update_user_profile(user, None, Some("Lisbon"), None, None)
        .expect("update");
    let second = db.get_user_profile(user).expect("profile").expect("user");
    assert_eq!(second.bio, None);
    assert_eq!(second.location.as_deref(), Some("Lisbon"));
    assert_eq!(second.favorite_genre, None);
    assert_eq!(second.joined_date, Some(joined));
}

#[test]
fn test_user_lookup_and_duplicate_username() {
    let (_temp_file, db) = create_test_db();
    let id = add_user(&db, "alice");

    let user = db.get_user(id).expect("user").expect("exists");
    assert_eq!(user.username, "alice");
    let creds = db
        .get_user_by_username("alice")
        .expect("user")
        .expect("exists");
    assert_eq!(creds.password_hash, "$argon2id$stub");
    assert!(db.get_user_by_username("nobody").expect("user").is_none());

    let outcome = db.create_user("alice", "other").expect("create");
    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "Username is already taken.");
}
