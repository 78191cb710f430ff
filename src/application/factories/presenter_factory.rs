use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where presented output ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// File output when a path is given, stdout otherwise
    pub fn from_output(output: Option<PathBuf>) -> Self {
        output.map_or(PresenterType::Stdout, PresenterType::File)
    }
}

/// Factory for creating output presenters
///
/// Keeps the choice between infrastructure adapters out of the CLI glue.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use prompt_ops::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_output() {
        assert_eq!(PresenterType::from_output(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from_output(Some(PathBuf::from("plan.json"))),
            PresenterType::File(PathBuf::from("plan.json"))
        );
    }

    #[test]
    fn test_create_file_presenter_writes_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.txt");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("OPTIMIZATION PLAN\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "OPTIMIZATION PLAN\n");
    }

    #[test]
    fn test_create_stdout_presenter() {
        let presenter = PresenterFactory::create(PresenterType::Stdout);
        assert!(presenter.present("").is_ok());
    }
}
