//! Builder for creating and configuring Cabinet instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Cabinet;
use crate::{
    db::Database,
    error::{CabinetError, Result},
};

/// Application name used for the XDG data directory.
const APP_NAME: &str = "vinyl-cabinet";
/// File name of the default database.
const DATABASE_FILE: &str = "cabinet.db";

/// Builder for creating and configuring Cabinet instances.
#[derive(Debug, Clone)]
pub struct CabinetBuilder {
    database_path: Option<PathBuf>,
}

impl CabinetBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/vinyl-cabinet/cabinet.db` or
    /// `~/.local/share/vinyl-cabinet/cabinet.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured cabinet, creating the database file and schema
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns `CabinetError::FileSystem` if the parent directory cannot be
    /// created. Returns `CabinetError::Database` if schema initialization
    /// fails.
    pub async fn build(self) -> Result<Cabinet> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| CabinetError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("using database {}", db_path.display());
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), CabinetError>(())
        })
        .await
        .map_err(CabinetError::join)??;

        Ok(Cabinet::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_NAME)
            .place_data_file(DATABASE_FILE)
            .map_err(|e| CabinetError::XdgDirectory(e.to_string()))
    }
}

impl Default for CabinetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
