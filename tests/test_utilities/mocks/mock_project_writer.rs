use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use prompt_ops::prelude::*;

/// Mock ProjectWriter for testing that keeps files in memory
#[derive(Default, Clone)]
pub struct MockProjectWriter {
    pub files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl MockProjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(self, path: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), String::new());
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl ProjectWriter for MockProjectWriter {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
