use crate::shared::Result;
use std::path::Path;

/// DatasetReader port for inspecting a dataset file
pub trait DatasetReader {
    /// Counts the examples in the dataset at `path`
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or not a list of
    /// examples
    fn count_examples(&self, path: &Path) -> Result<usize>;
}
