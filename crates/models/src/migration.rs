use std::path::{Path, PathBuf};

use crate::error::{PosError, Result};

/// File name the printer looks for next to its executable.
pub const MIGRATION_FILE_NAME: &str = "migration.sql";

/// SQL text read from disk, kept exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    path: PathBuf,
    contents: String,
}

impl MigrationFile {
    /// Reads the whole file as UTF-8. Missing, unreadable and non-UTF-8
    /// files all map to [`PosError::FileAccess`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = std::fs::read_to_string(&path).map_err(|source| PosError::FileAccess {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, contents })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}
