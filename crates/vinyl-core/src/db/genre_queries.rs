//! Genre reference data and album-genre lookups.

use log::warn;
use rusqlite::{Connection, Row, params};

use super::executor::{execute_on, fetch_all, get_id};
use crate::{
    error::{CabinetError, DatabaseResultExt, Result, is_constraint_violation},
    models::{Genre, Outcome},
};

const SELECT_ALL_GENRES_SQL: &str = "SELECT id, name FROM genres ORDER BY name";
const SELECT_ALBUM_GENRES_SQL: &str = "SELECT g.id, g.name FROM genres g \
     JOIN album_genres ag ON g.id = ag.genre_id WHERE ag.album_id = ?1 ORDER BY g.name";
const INSERT_GENRE_SQL: &str = "INSERT INTO genres (name) VALUES (?1)";

fn build_genre_from_row(row: &Row<'_>) -> rusqlite::Result<Genre> {
    Ok(Genre {
        id: get_id(row, 0)?,
        name: row.get(1)?,
    })
}

/// Genres of one album, alphabetically, on an existing connection.
pub(crate) fn album_genres_on(conn: &Connection, album_id: u64) -> rusqlite::Result<Vec<Genre>> {
    fetch_all(
        conn,
        SELECT_ALBUM_GENRES_SQL,
        params![album_id as i64],
        build_genre_from_row,
    )
}

impl super::Database {
    /// Lists every genre, alphabetically.
    pub fn list_all_genres(&self) -> Result<Vec<Genre>> {
        fetch_all(&self.connection, SELECT_ALL_GENRES_SQL, [], build_genre_from_row)
            .db_context("Failed to query genres")
    }

    /// Lists the genres of one album, alphabetically.
    pub fn get_album_genres(&self, album_id: u64) -> Result<Vec<Genre>> {
        album_genres_on(&self.connection, album_id).db_context("Failed to query album genres")
    }

    /// Adds a genre to the reference list. A duplicate name is a failed
    /// outcome.
    pub fn add_genre(&self, name: &str) -> Result<Outcome<u64>> {
        match execute_on(&self.connection, INSERT_GENRE_SQL, params![name]) {
            Ok(id) => Ok(Outcome::success(id as u64, format!("Genre '{name}' added."))),
            Err(e) if is_constraint_violation(&e) => {
                warn!("genre insert rejected: {e}");
                Ok(Outcome::failure(format!("Genre '{name}' already exists.")))
            }
            Err(e) => Err(CabinetError::database("Failed to insert genre").with_source(e)),
        }
    }
}
