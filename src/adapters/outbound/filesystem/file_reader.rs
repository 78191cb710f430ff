use crate::ports::outbound::DatasetReader;
use crate::shared::error::PromptOpsError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

/// FileSystemReader adapter for reading datasets from the file system
///
/// Datasets are JSON arrays with one object per example. Files go through
/// the shared safety checks (no symlinks, regular files only, size limit)
/// before they are parsed.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader for FileSystemReader {
    fn count_examples(&self, path: &Path) -> Result<usize> {
        let content = read_checked(path, "dataset")?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| PromptOpsError::Validation {
                message: format!("dataset {} is not valid JSON: {}", path.display(), e),
            })?;

        match value {
            Value::Array(examples) => Ok(examples.len()),
            other => Err(PromptOpsError::Validation {
                message: format!(
                    "dataset {} must be a JSON array of examples, found {}",
                    path.display(),
                    json_kind(&other)
                ),
            }
            .into()),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_count_examples() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dataset.json");
        fs::write(&path, r#"[{"question": "a"}, {"question": "b"}, {"question": "c"}]"#).unwrap();

        assert_eq!(FileSystemReader::new().count_examples(&path).unwrap(), 3);
    }

    #[test]
    fn test_count_examples_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dataset.json");
        fs::write(&path, "[]").unwrap();

        assert_eq!(FileSystemReader::new().count_examples(&path).unwrap(), 0);
    }

    #[test]
    fn test_count_examples_rejects_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dataset.json");
        fs::write(&path, r#"{"examples": []}"#).unwrap();

        let err = FileSystemReader::new().count_examples(&path).unwrap_err();
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn test_count_examples_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dataset.json");
        fs::write(&path, "[{broken").unwrap();

        let err = FileSystemReader::new().count_examples(&path).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_count_examples_missing_file() {
        let result = FileSystemReader::new().count_examples(Path::new("/nonexistent/dataset.json"));
        assert!(result.is_err());
    }
}
