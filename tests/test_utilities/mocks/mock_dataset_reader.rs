use std::path::Path;
use prompt_ops::prelude::*;

/// Mock DatasetReader for testing
pub struct MockDatasetReader {
    count: usize,
    should_fail: bool,
}

impl MockDatasetReader {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            count: 0,
            should_fail: true,
        }
    }
}

impl DatasetReader for MockDatasetReader {
    fn count_examples(&self, path: &Path) -> Result<usize> {
        if self.should_fail {
            anyhow::bail!("Mock dataset read failure: {}", path.display());
        }
        Ok(self.count)
    }
}
