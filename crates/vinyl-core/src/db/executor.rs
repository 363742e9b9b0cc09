//! Statement execution primitives.
//!
//! Two primitives back every query in the crate: run a mutating statement and
//! report the last inserted rowid, or run a query and collect its rows.
//! Parameters are always bound positionally.

use std::collections::BTreeMap;

use jiff::{Timestamp, Unit};
use rusqlite::{Connection, OptionalExtension, Params, Row, types::Type, types::Value};

use crate::error::{DatabaseResultExt, Result};

/// A row as a mapping from column name to value.
pub type Record = BTreeMap<String, Value>;

impl super::Database {
    /// Runs a single INSERT, UPDATE or DELETE and commits it immediately.
    ///
    /// Returns the rowid of the most recent successful insert on this
    /// connection, which is only meaningful after an INSERT.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        execute_on(&self.connection, sql, params).db_context("Failed to execute statement")
    }

    /// Runs a query and returns every row as a [`Record`], in result order.
    pub fn fetch<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Record>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let rows = stmt
            .query_map(params, |row| {
                names
                    .iter()
                    .enumerate()
                    .map(|(idx, name)| Ok((name.clone(), row.get::<_, Value>(idx)?)))
                    .collect::<rusqlite::Result<Record>>()
            })
            .db_context("Failed to run query")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch rows")
    }
}

/// Executes one statement on `conn` (a plain connection or a transaction).
pub(crate) fn execute_on<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<i64> {
    conn.execute(sql, params)?;
    Ok(conn.last_insert_rowid())
}

/// Runs a query and maps every row with `f`.
pub(crate) fn fetch_all<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    f: F,
) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params, f)?;
    rows.collect()
}

/// Runs a query expected to return at most one row.
pub(crate) fn fetch_optional<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    f: F,
) -> rusqlite::Result<Option<T>>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    conn.query_row(sql, params, f).optional()
}

/// Reads an integer id column as `u64`.
pub(crate) fn get_id(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Reads an RFC 3339 text column into a [`Timestamp`].
pub(crate) fn get_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Current time truncated to whole seconds, so stored timestamps have a fixed
/// width and sort lexically.
pub(crate) fn now_string() -> String {
    let now = Timestamp::now();
    now.round(Unit::Second).unwrap_or(now).to_string()
}

/// Wraps a search term in `%` after escaping LIKE metacharacters. Use with
/// `ESCAPE '\'`.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("rock"), "%rock%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\d"), "%c:\\\\d%");
    }

    #[test]
    fn test_now_string_has_second_precision() {
        let s = now_string();
        assert_eq!(s.len(), "2024-01-01T00:00:00Z".len());
        assert!(s.ends_with('Z'));
        s.parse::<Timestamp>().expect("round-trips through jiff");
    }
}
