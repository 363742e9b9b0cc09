//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Cascades only fire when this is on, and it is per connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Older databases predate cover images
        if !self.has_column("albums", "image_url")? {
            info!("migrating: adding albums.image_url");
            self.connection
                .execute("ALTER TABLE albums ADD COLUMN image_url TEXT", [])
                .db_context("Failed to add image_url column to albums table")?;
        }

        // The scalar genre column was superseded by album_genres
        if self.has_column("albums", "genre")? {
            info!("migrating: dropping legacy albums.genre");
            self.connection
                .execute("ALTER TABLE albums DROP COLUMN genre", [])
                .db_context("Failed to drop legacy genre column from albums table")?;
        }

        self.normalize_timestamps("reviews", "created_at")?;
        self.normalize_timestamps("user_profiles", "joined_date")?;

        Ok(())
    }

    /// Rewrites SQLite `CURRENT_TIMESTAMP` values (`YYYY-MM-DD HH:MM:SS`, UTC)
    /// as RFC 3339 so they parse and sort with the rest.
    fn normalize_timestamps(&self, table: &str, column: &str) -> Result<()> {
        let sql = format!(
            "UPDATE {table} SET {column} = strftime('%Y-%m-%dT%H:%M:%SZ', {column}) \
             WHERE {column} NOT LIKE '%Z' \
             AND strftime('%Y-%m-%dT%H:%M:%SZ', {column}) IS NOT NULL"
        );
        let changed = self
            .connection
            .execute(&sql, [])
            .db_context("Failed to normalize legacy timestamps")?;
        if changed > 0 {
            info!("migrating: normalized {changed} timestamps in {table}.{column}");
        }
        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
