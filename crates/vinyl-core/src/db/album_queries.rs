//! Album CRUD operations, search and owner aggregates.

use log::{debug, warn};
use rusqlite::{Connection, Row, ToSql, params};

use super::{
    executor::{execute_on, fetch_all, fetch_optional, get_id, like_pattern},
    genre_queries::album_genres_on,
};
use crate::{
    error::{CabinetError, DatabaseResultExt, Result, is_constraint_violation},
    models::{Album, AlbumDetails, Outcome, UserStats, round_to_tenth},
};

const INSERT_ALBUM_SQL: &str =
    "INSERT INTO albums (title, artist, year, user_id, image_url) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_ALBUM_SQL: &str =
    "UPDATE albums SET title = ?1, artist = ?2, year = ?3, image_url = ?4 WHERE id = ?5";
const DELETE_ALBUM_SQL: &str = "DELETE FROM albums WHERE id = ?1";
const DELETE_ALBUM_GENRES_SQL: &str = "DELETE FROM album_genres WHERE album_id = ?1";
const INSERT_ALBUM_GENRE_SQL: &str =
    "INSERT INTO album_genres (album_id, genre_id) VALUES (?1, ?2)";

// Every album view selects these columns in this order
const ALBUM_VIEW_COLUMNS: &str =
    "a.id, a.title, a.artist, a.year, a.image_url, a.user_id, u.username";
const ALBUM_VIEW_FROM: &str = "FROM albums a JOIN users u ON a.user_id = u.id";

const USER_STATS_SQL: &str = "SELECT \
     (SELECT COUNT(id) FROM albums WHERE user_id = ?1), \
     (SELECT COUNT(r.id) FROM reviews r JOIN albums a ON r.album_id = a.id WHERE a.user_id = ?1), \
     (SELECT AVG(r.stars) FROM reviews r JOIN albums a ON r.album_id = a.id WHERE a.user_id = ?1)";

const ALBUM_ADDED_MESSAGE: &str = "Album added successfully.";
const ALBUM_UPDATED_MESSAGE: &str = "Album updated successfully.";
const GENRES_UPDATED_MESSAGE: &str = "Genres updated successfully.";

impl super::Database {
    /// Helper function to construct an Album from a view row. Genres are
    /// attached separately.
    fn build_album_from_row(row: &Row<'_>) -> rusqlite::Result<Album> {
        Ok(Album {
            id: get_id(row, 0)?,
            title: row.get(1)?,
            artist: row.get(2)?,
            year: row.get(3)?,
            image_url: row.get(4)?,
            owner_id: get_id(row, 5)?,
            owner_username: row.get(6)?,
            genres: Vec::new(),
            is_favorite: None,
        })
    }

    /// Like [`Self::build_album_from_row`], reading the favorite flag from
    /// column 7.
    fn build_album_with_favorite(row: &Row<'_>) -> rusqlite::Result<Album> {
        let mut album = Self::build_album_from_row(row)?;
        album.is_favorite = Some(row.get(7)?);
        Ok(album)
    }

    /// Loads the genre list for every album on the same connection.
    fn attach_genres(conn: &Connection, albums: &mut [Album]) -> rusqlite::Result<()> {
        for album in albums.iter_mut() {
            album.genres = album_genres_on(conn, album.id)?;
        }
        Ok(())
    }

    /// Adds a new album owned by `owner_id` and associates it with
    /// `genre_ids`.
    ///
    /// The album row and its genre associations are written in one
    /// transaction. A constraint violation (unknown owner, unknown or repeated
    /// genre) rolls everything back and is reported as a failed
    /// [`Outcome`] carrying the store's message.
    pub fn add_album(
        &mut self,
        title: &str,
        artist: &str,
        year: i64,
        genre_ids: &[u64],
        owner_id: u64,
        image_url: Option<&str>,
    ) -> Result<Outcome<u64>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let image_url = image_url.filter(|url| !url.is_empty());
        let inserted = execute_on(
            &tx,
            INSERT_ALBUM_SQL,
            params![title, artist, year, owner_id as i64, image_url],
        )
        .and_then(|id| {
            let album_id = id as u64;
            replace_album_genres(&tx, album_id, genre_ids)?;
            Ok(album_id)
        });

        match inserted {
            Ok(album_id) => {
                tx.commit().db_context("Failed to commit transaction")?;
                debug!("added album {album_id} for user {owner_id}");
                Ok(Outcome::success(album_id, ALBUM_ADDED_MESSAGE))
            }
            Err(e) if is_constraint_violation(&e) => {
                warn!("album insert rejected: {e}");
                Ok(Outcome::failure(e.to_string()))
            }
            Err(e) => Err(CabinetError::database("Failed to insert album").with_source(e)),
        }
    }

    /// Overwrites every scalar field of an album and replaces its genre set.
    ///
    /// Genre associations are deleted and re-inserted, not merged. Both steps
    /// share one transaction so no reader observes the album without genres.
    pub fn update_album(
        &mut self,
        id: u64,
        title: &str,
        artist: &str,
        year: i64,
        genre_ids: &[u64],
        image_url: Option<&str>,
    ) -> Result<Outcome> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let image_url = image_url.filter(|url| !url.is_empty());
        let rows_affected = tx
            .execute(
                UPDATE_ALBUM_SQL,
                params![title, artist, year, image_url, id as i64],
            )
            .map_err(|e| CabinetError::database("Failed to update album").with_source(e))?;

        if rows_affected == 0 {
            return Ok(Outcome::failure(format!("Album with ID {id} not found.")));
        }

        match replace_album_genres(&tx, id, genre_ids) {
            Ok(()) => {
                tx.commit().db_context("Failed to commit transaction")?;
                debug!("updated album {id}");
                Ok(Outcome::success((), ALBUM_UPDATED_MESSAGE))
            }
            Err(e) if is_constraint_violation(&e) => {
                warn!("album update rejected: {e}");
                Ok(Outcome::failure(e.to_string()))
            }
            Err(e) => Err(CabinetError::database("Failed to update album genres").with_source(e)),
        }
    }

    /// Replaces the genre set of an album inside one transaction.
    pub fn set_album_genres(&mut self, album_id: u64, genre_ids: &[u64]) -> Result<Outcome> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        match replace_album_genres(&tx, album_id, genre_ids) {
            Ok(()) => {
                tx.commit().db_context("Failed to commit transaction")?;
                Ok(Outcome::success((), GENRES_UPDATED_MESSAGE))
            }
            Err(e) if is_constraint_violation(&e) => {
                warn!("genre assignment for album {album_id} rejected: {e}");
                Ok(Outcome::failure(e.to_string()))
            }
            Err(e) => Err(CabinetError::database("Failed to assign genres").with_source(e)),
        }
    }

    /// Deletes an album unconditionally. Genre associations, favorites and
    /// reviews go with it through foreign-key cascades.
    pub fn delete_album(&self, id: u64) -> Result<()> {
        self.execute(DELETE_ALBUM_SQL, params![id as i64])?;
        debug!("deleted album {id}");
        Ok(())
    }

    /// Retrieves an album by its ID, with owner username and genres.
    pub fn get_album_by_id(&self, id: u64) -> Result<Option<Album>> {
        let sql = format!("SELECT {ALBUM_VIEW_COLUMNS} {ALBUM_VIEW_FROM} WHERE a.id = ?1");
        let mut album = fetch_optional(
            &self.connection,
            &sql,
            params![id as i64],
            Self::build_album_from_row,
        )
        .db_context("Failed to query album")?;

        if let Some(ref mut album) = album {
            album.genres = album_genres_on(&self.connection, album.id)
                .db_context("Failed to query album genres")?;
        }

        Ok(album)
    }

    /// Loads an album together with its reviews, average rating and the
    /// viewer's favorite and review state, all on one connection.
    pub fn get_album_details(
        &self,
        id: u64,
        viewer: Option<u64>,
    ) -> Result<Option<AlbumDetails>> {
        let Some(mut album) = self.get_album_by_id(id)? else {
            return Ok(None);
        };
        album.is_favorite = match viewer {
            Some(user_id) => Some(self.is_favorite(user_id, id)?),
            None => None,
        };

        Ok(Some(AlbumDetails {
            reviews: self.get_album_reviews(id)?,
            average_rating: self.get_album_average_rating(id)?,
            viewer_has_reviewed: self.has_user_reviewed(id, viewer)?,
            album,
        }))
    }

    /// Lists every album. Rows come back in insertion order, which callers
    /// should not rely on.
    pub fn get_all_albums(&self) -> Result<Vec<Album>> {
        let sql = format!("SELECT {ALBUM_VIEW_COLUMNS} {ALBUM_VIEW_FROM} ORDER BY a.id");
        self.load_albums(&sql, [], Self::build_album_from_row)
    }

    /// Lists the albums owned by `owner_id`.
    pub fn get_user_albums(&self, owner_id: u64) -> Result<Vec<Album>> {
        let sql = format!(
            "SELECT {ALBUM_VIEW_COLUMNS} {ALBUM_VIEW_FROM} WHERE a.user_id = ?1 ORDER BY a.id"
        );
        self.load_albums(&sql, params![owner_id as i64], Self::build_album_from_row)
    }

    /// Lists the albums `user_id` has favorited.
    pub fn get_user_favorites(&self, user_id: u64) -> Result<Vec<Album>> {
        let sql = format!(
            "SELECT {ALBUM_VIEW_COLUMNS}, 1 {ALBUM_VIEW_FROM} \
             JOIN favorites f ON f.album_id = a.id WHERE f.user_id = ?1 ORDER BY a.id"
        );
        self.load_albums(&sql, params![user_id as i64], Self::build_album_with_favorite)
    }

    /// Searches albums by free text.
    ///
    /// The text is split on whitespace. Every term must match (AND across
    /// terms) at least one of title, artist, year or the name of any of the
    /// album's genres (OR across fields), by case-insensitive substring.
    /// Blank text yields no albums; callers wanting the unfiltered list use
    /// [`Self::get_all_albums`].
    ///
    /// When `requesting_user` is given each album carries its favorite flag.
    pub fn search_albums(
        &self,
        text: &str,
        requesting_user: Option<u64>,
    ) -> Result<Vec<Album>> {
        let terms: Vec<&str> = text.split_whitespace().collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut params_vec: Vec<Box<dyn ToSql>> =
            vec![Box::new(requesting_user.map(|id| id as i64))];
        let mut conditions = Vec::with_capacity(terms.len());

        for term in &terms {
            let idx = params_vec.len() + 1;
            conditions.push(format!(
                "(a.title LIKE ?{idx} ESCAPE '\\' \
                 OR a.artist LIKE ?{idx} ESCAPE '\\' \
                 OR CAST(a.year AS TEXT) LIKE ?{idx} ESCAPE '\\' \
                 OR EXISTS (SELECT 1 FROM album_genres ag JOIN genres g ON g.id = ag.genre_id \
                            WHERE ag.album_id = a.id AND g.name LIKE ?{idx} ESCAPE '\\'))"
            ));
            params_vec.push(Box::new(like_pattern(term)));
        }

        let sql = format!(
            "SELECT {ALBUM_VIEW_COLUMNS}, \
             EXISTS (SELECT 1 FROM favorites f WHERE f.album_id = a.id AND f.user_id = ?1) \
             {ALBUM_VIEW_FROM} WHERE {} ORDER BY a.id",
            conditions.join(" AND ")
        );
        debug!("search {:?} with {} term(s)", text, terms.len());

        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();
        let mut albums = self.load_albums(&sql, &params_refs[..], Self::build_album_with_favorite)?;

        if requesting_user.is_none() {
            for album in &mut albums {
                album.is_favorite = None;
            }
        }

        Ok(albums)
    }

    /// Album count, review count and average rating across the albums
    /// `user_id` owns. The average is 0 when there are no reviews.
    pub fn get_user_stats(&self, user_id: u64) -> Result<UserStats> {
        self.connection
            .query_row(USER_STATS_SQL, params![user_id as i64], |row| {
                let average: Option<f64> = row.get(2)?;
                Ok(UserStats {
                    album_count: row.get::<_, i64>(0)? as u64,
                    review_count: row.get::<_, i64>(1)? as u64,
                    average_rating: average.map(round_to_tenth).unwrap_or(0.0),
                })
            })
            .db_context("Failed to query user stats")
    }

    fn load_albums<P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<Album>>
    where
        P: rusqlite::Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<Album>,
    {
        let mut albums =
            fetch_all(&self.connection, sql, params, f).db_context("Failed to query albums")?;
        Self::attach_genres(&self.connection, &mut albums)
            .db_context("Failed to query album genres")?;
        Ok(albums)
    }
}

/// Deletes every genre association of `album_id` and inserts `genre_ids`.
fn replace_album_genres(
    conn: &Connection,
    album_id: u64,
    genre_ids: &[u64],
) -> rusqlite::Result<()> {
    execute_on(conn, DELETE_ALBUM_GENRES_SQL, params![album_id as i64])?;
    for genre_id in genre_ids {
        execute_on(
            conn,
            INSERT_ALBUM_GENRE_SQL,
            params![album_id as i64, *genre_id as i64],
        )?;
    }
    Ok(())
}
