use crate::shared::Result;
use std::fs;
use std::path::{Component, Path};

/// Maximum size of a template or config file (10 MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a template name refers to a single file inside its directory
///
/// # Security
/// Template names come from callers and are joined onto a base directory, so
/// anything other than a plain file name could escape that directory.
///
/// # Errors
/// Returns an error if the name is empty, absolute, or contains separators,
/// `.` or `..` components.
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("File name must not be empty");
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => anyhow::bail!(
            "Security: '{}' is not a plain file name. Path separators and relative components are not allowed.",
            name
        ),
    }
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "template", "config file")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<fs::Metadata> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular, size-limited file to a string
///
/// Combines [`validate_regular_file`] and [`validate_file_size`] before reading.
pub fn read_checked(path: &Path, file_description: &str) -> Result<String> {
    let metadata = validate_regular_file(path, file_description)?;
    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} {}: {}", file_description, path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_name_plain() {
        assert!(validate_file_name("sample_config.yaml").is_ok());
    }

    #[test]
    fn test_validate_file_name_rejects_traversal() {
        assert!(validate_file_name("../secret.yaml").is_err());
        assert!(validate_file_name("nested/file.yaml").is_err());
        assert!(validate_file_name("/etc/passwd").is_err());
        assert!(validate_file_name("..").is_err());
    }

    #[test]
    fn test_validate_file_name_empty() {
        let err = validate_file_name("  ").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "test").unwrap();

        assert!(validate_regular_file(&file_path, "test file").is_ok());
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "test directory");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "test").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_regular_file(&link, "template").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/file.txt");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_read_checked_missing_file() {
        let err = read_checked(Path::new("/nonexistent/file.yaml"), "config file").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file metadata"));
    }

    #[test]
    fn test_read_checked_reads_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prompt.txt");
        fs::write(&file_path, "You are a helpful assistant.").unwrap();

        let content = read_checked(&file_path, "prompt").unwrap();
        assert_eq!(content, "You are a helpful assistant.");
    }
}
