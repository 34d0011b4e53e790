//! Store location configuration.
//!
//! The storage path is injected into [`crate::db::Store`] at construction
//! instead of being hardwired to a per-user directory, so tests and scripts
//! can point the gateway at a temporary location.

use std::path::{Path, PathBuf};

/// Where the persistence gateway keeps its SQLite file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Full path of the SQLite database file. The parent directory is
    /// created on first open.
    pub db_path: PathBuf,
}

impl StoreConfig {
    /// Configuration pointing at an explicit database file.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// The conventional per-user location, `~/.ppi/ppi.sqlite3`.
    ///
    /// Falls back to the current directory when no home directory can be
    /// resolved (containers, stripped-down environments).
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ppi")
            .join("ppi.sqlite3")
    }

    /// The configured database file path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: Self::default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_conventional_location() {
        let path = StoreConfig::default_path();
        assert!(path.ends_with(".ppi/ppi.sqlite3"));
    }

    #[test]
    fn explicit_path_is_kept_verbatim() {
        let config = StoreConfig::new("/tmp/isolated/ppi.sqlite3");
        assert_eq!(config.db_path(), Path::new("/tmp/isolated/ppi.sqlite3"));
    }
}
