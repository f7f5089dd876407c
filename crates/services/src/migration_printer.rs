//! Prints a migration file wrapped in operator instructions.
//!
//! The output is meant to be pasted into a SQL client by hand: a short
//! header, the file inside a fenced `sql` block, and a closing note.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pos_models::{MigrationFile, PosError, Result, MIGRATION_FILE_NAME};
use tracing::debug;

pub const BANNER_HEADER: &str = "=== Database migration required ===";
pub const BANNER_INSTRUCTION: &str =
    "Run the following SQL against the POS database before starting the application:";
pub const SQL_FENCE_OPEN: &str = "```sql";
pub const SQL_FENCE_CLOSE: &str = "```";
pub const BANNER_CLOSING: &str =
    "Once the statements have run successfully, restart the application to pick up the schema changes.";

#[derive(Debug, Clone)]
pub struct MigrationPrinter {
    path: PathBuf,
}

impl MigrationPrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `migration.sql` in the directory holding `executable`.
    pub fn beside(executable: &Path) -> Self {
        let dir = executable.parent().unwrap_or_else(|| Path::new("."));
        Self::new(dir.join(MIGRATION_FILE_NAME))
    }

    /// Uses `override_path` when configured, otherwise the file next to the
    /// running executable.
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(override_path, std::env::current_exe)
    }

    /// Like [`MigrationPrinter::resolve`] with the executable lookup supplied
    /// by the caller. A failed lookup is a `FileAccess` error on the bare
    /// file name, since the migration file cannot be located.
    pub fn resolve_with<F>(override_path: Option<PathBuf>, current_exe: F) -> Result<Self>
    where
        F: FnOnce() -> io::Result<PathBuf>,
    {
        if let Some(path) = override_path {
            return Ok(Self::new(path));
        }

        let exe = current_exe().map_err(|source| PosError::FileAccess {
            path: PathBuf::from(MIGRATION_FILE_NAME),
            source,
        })?;
        Ok(Self::beside(&exe))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(&self) -> Result<String> {
        let migration = MigrationFile::load(&self.path)?;
        debug!(
            path = %migration.path().display(),
            bytes = migration.contents().len(),
            "Loaded migration file"
        );
        Ok(render_banner(&migration))
    }

    /// Nothing is written unless the file was read completely.
    pub fn print_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let text = self.render()?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

pub fn render_banner(migration: &MigrationFile) -> String {
    let contents = migration.contents();
    let mut out = String::with_capacity(contents.len() + 256);

    for line in [BANNER_HEADER, "", BANNER_INSTRUCTION, "", SQL_FENCE_OPEN] {
        out.push_str(line);
        out.push('\n');
    }

    out.push_str(contents);
    if !contents.is_empty() && !contents.ends_with('\n') {
        out.push('\n');
    }

    for line in [SQL_FENCE_CLOSE, "", BANNER_CLOSING] {
        out.push_str(line);
        out.push('\n');
    }

    out
}
