//! Store location management

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{Error, Result};

/// Directory created under the user config dir
const APP_DIR: &str = "mindflow";

/// Name of the backing file
const DB_FILE: &str = "db.json";

/// Where a store keeps its backing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the backing file
    pub dir: PathBuf,
    /// Backing file name inside `dir`
    pub file_name: String,
}

impl StoreConfig {
    /// Per-user location: `<config dir>/mindflow/db.json`
    pub fn default_location() -> Result<Self> {
        let dirs = BaseDirs::new().ok_or(Error::ConfigDirUnavailable)?;
        Ok(Self::in_dir(dirs.config_dir().join(APP_DIR)))
    }

    /// Keep the default file name but place it in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: DB_FILE.to_string(),
        }
    }

    /// Use a different backing file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Full path of the backing file
    pub fn db_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Create the store directory if it is missing
    pub fn ensure_dir(&self) -> Result<()> {
        ensure_parent_dir(&self.db_path())
    }
}

/// Create the directory containing `path`, if any
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))
        }
        _ => Ok(()),
    }
}
