//! Named save files for [`SessionState`].
//!
//! Each save is one pretty-printed JSON document at `<dir>/<name>.json`.
//! The layout is fixed: unknown or missing fields make a file unreadable.

use crate::debug_log;
use crate::error::GameError;
use crate::game_state::SessionState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SAVE_EXTENSION: &str = "json";
pub const DEFAULT_SAVE_DIR: &str = "saved_games";

#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl Default for SaveStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_DIR)
    }
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Map a player-supplied name to its file. Names must be a single
    /// path component.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, GameError> {
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.chars().any(std::path::is_separator);
        if invalid {
            return Err(GameError::InvalidSaveName {
                name: name.to_string(),
            });
        }
        Ok(self.dir.join(format!("{name}.{SAVE_EXTENSION}")))
    }

    pub fn save(&self, name: &str, state: &SessionState) -> Result<PathBuf, GameError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir).map_err(|source| GameError::IoWriteError {
            path: self.dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(state).map_err(|e| GameError::IoWriteError {
            path: path.clone(),
            source: io::Error::from(e),
        })?;
        fs::write(&path, json).map_err(|source| GameError::IoWriteError {
            path: path.clone(),
            source,
        })?;
        debug_log!("save() - wrote {}", path.display());
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<SessionState, GameError> {
        let path = self.path_for(name)?;
        let json = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => GameError::FileNotFound {
                name: name.to_string(),
            },
            _ => GameError::IoReadError {
                path: path.clone(),
                source,
            },
        })?;
        let malformed = |reason: String| GameError::DeserializationError {
            path: path.clone(),
            reason,
        };
        let state: SessionState =
            serde_json::from_str(&json).map_err(|e| malformed(e.to_string()))?;
        state.validate().map_err(malformed)?;
        debug_log!("load() - read {}", path.display());
        Ok(state)
    }

    /// Names of the existing saves, sorted. A missing directory has none.
    pub fn list(&self) -> Result<Vec<String>, GameError> {
        let read_error = |source| GameError::IoReadError {
            path: self.dir.clone(),
            source,
        };
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(read_error(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(read_error)?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SAVE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
