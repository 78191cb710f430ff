use crate::shared::Result;
use std::path::Path;

/// ProjectWriter port for creating files in a project directory
pub trait ProjectWriter {
    /// Whether something already exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Writes `content` to `path`, creating missing parent directories
    ///
    /// # Errors
    /// Returns an error if the path is unsafe to write (e.g. a symlink) or
    /// the write fails
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}
