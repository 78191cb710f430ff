use crate::ports::outbound::{OutputPresenter, ProjectWriter};
use crate::shared::error::PromptOpsError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Rejects writing through a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so an existing link is detected instead of
/// silently writing to whatever it points at.
fn validate_output_security(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(PromptOpsError::FileWriteError {
            path: path.to_path_buf(),
            details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
        }
        .into()),
        Ok(metadata) if metadata.is_dir() => Err(PromptOpsError::FileWriteError {
            path: path.to_path_buf(),
            details: "Output path is a directory".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

fn write_checked(path: &Path, content: &str) -> Result<()> {
    validate_output_security(path)?;

    fs::write(path, content).map_err(|e| PromptOpsError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    Ok(())
}

/// FileSystemWriter adapter for writing output to a single file
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(PromptOpsError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        write_checked(&self.output_path, content)?;

        log::info!("wrote {} bytes to {}", content.len(), self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

/// FileSystemProjectWriter adapter for scaffolding project files
///
/// Creates missing parent directories, then writes each file with the same
/// symlink checks as [`FileSystemWriter`].
pub struct FileSystemProjectWriter;

impl FileSystemProjectWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectWriter for FileSystemProjectWriter {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PromptOpsError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Failed to create directory {}: {}", parent.display(), e),
            })?;
        }

        write_checked(path, content)?;
        log::debug!("scaffolded {}", path.display());
        Ok(())
    }
}
