//! Builder for creating and configuring TravelPlanner instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::TravelPlanner;
use crate::{
    db::{Database, DATABASE_FILE_NAME},
    error::{ItineraryError, Result},
};

/// Builder for creating and configuring TravelPlanner instances.
#[derive(Debug, Clone, Default)]
pub struct TravelPlannerBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
}

impl TravelPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/travel_planner/travel_planner.db` or
    /// `~/.local/share/travel_planner/travel_planner.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keeps the store in memory; nothing is written to disk.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Builds the configured planner instance, opening the one database
    /// handle it will use for its whole lifetime.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::FileSystem` if the database directory cannot
    /// be created, `ItineraryError::XdgDirectory` if no default location can
    /// be found, and `ItineraryError::Database` if initialization fails.
    pub async fn build(self) -> Result<TravelPlanner> {
        if self.in_memory {
            let db = task::spawn_blocking(Database::open_in_memory)
                .await
                .map_err(join_error)??;
            return Ok(TravelPlanner::new(db));
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ItineraryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("building travel planner on {}", db_path.display());
        let db = task::spawn_blocking(move || Database::open(&db_path))
            .await
            .map_err(join_error)??;

        Ok(TravelPlanner::new(db))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("travel_planner")
            .place_data_file(DATABASE_FILE_NAME)
            .map_err(|e| ItineraryError::XdgDirectory(e.to_string()))
    }
}

fn join_error(e: task::JoinError) -> ItineraryError {
    ItineraryError::Configuration {
        message: format!("Task join error: {e}"),
    }
}
