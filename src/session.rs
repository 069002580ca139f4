// Session payload persisted on disk
mod data;

pub use data::{Location, SessionData};

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{AppError, SessionError};

const SESSION_FILE_NAME: &str = "session.json";

/// Source of the current session.
///
/// Commands receive the provider as a parameter instead of reading a global
/// store, so tests can substitute an in-memory session.
pub trait SessionProvider {
    fn load(&self) -> Result<SessionData, SessionError>;
}

/// Session stored as JSON in the data directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionProvider for FileSessionStore {
    fn load(&self) -> Result<SessionData, SessionError> {
        debug!("Loading session from {}", self.path().display());

        let raw = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SessionError::NotFound(self.path.clone())
            } else {
                SessionError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&raw).map_err(|source| SessionError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl SessionData {
    /// The location every location-scoped command works on: the first one
    /// saved. Fails with [`AppError::EmptyLocationList`] when there is none.
    pub fn primary_location(&self) -> Result<&Location, AppError> {
        self.locations.first().ok_or(AppError::EmptyLocationList)
    }
}
