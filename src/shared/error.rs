use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing template, bad config, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for prompt-ops.
///
/// Every message ends with a hint telling the user what to check next.
#[derive(Debug, Error)]
pub enum PromptOpsError {
    #[error("Template not found: {name}\nDetails: {details}\n\n💡 Hint: Available templates are sample_config.yaml, sample_dataset.json and sample_prompt.txt")]
    TemplateNotFound { name: String, details: String },

    #[error("Failed to parse template: {name}\nDetails: {details}\n\n💡 Hint: Please verify that the template contains valid {format}")]
    TemplateParseError {
        name: String,
        format: String,
        details: String,
    },

    #[error("Config file not found: {path}\n\n💡 Hint: Run `prompt-ops init` to create one, or pass --config")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Refusing to overwrite existing file: {path}\n\n💡 Hint: Pass --force to overwrite, or choose another directory")]
    FileExists { path: PathBuf },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for settings and config values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_template_not_found_display() {
        let error = PromptOpsError::TemplateNotFound {
            name: "missing.yaml".to_string(),
            details: "No such file".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Template not found: missing.yaml"));
        assert!(display.contains("No such file"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_template_parse_error_display() {
        let error = PromptOpsError::TemplateParseError {
            name: "sample_dataset.json".to_string(),
            format: "JSON".to_string(),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("sample_dataset.json"));
        assert!(display.contains("valid JSON"));
    }

    #[test]
    fn test_file_exists_display() {
        let error = PromptOpsError::FileExists {
            path: PathBuf::from("/tmp/project/prompt-ops.config.yml"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Refusing to overwrite"));
        assert!(display.contains("--force"));
    }

    #[test]
    fn test_validation_display() {
        let error = PromptOpsError::Validation {
            message: "num_threads must be at least 1".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Validation error: num_threads must be at least 1"
        );
    }
}
