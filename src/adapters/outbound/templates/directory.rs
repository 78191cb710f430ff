use crate::ports::outbound::TemplateSource;
use crate::shared::error::PromptOpsError;
use crate::shared::security::{read_checked, validate_file_name};
use crate::shared::Result;
use std::path::PathBuf;

/// DirectoryTemplates adapter reading templates from a directory on disk
///
/// Lets teams keep their own config and dataset templates next to the
/// project instead of the built-in ones.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Absolute-or-relative path of the template called `name`
    pub fn template_path(&self, name: &str) -> Result<PathBuf> {
        validate_file_name(name)?;
        Ok(self.root.join(name))
    }
}

impl TemplateSource for DirectoryTemplates {
    fn read_template(&self, name: &str) -> Result<String> {
        let path = self.template_path(name)?;

        if !path.exists() {
            return Err(PromptOpsError::TemplateNotFound {
                name: name.to_string(),
                details: format!("{} does not exist", path.display()),
            }
            .into());
        }

        read_checked(&path, "template")
    }
}
