use std::path::PathBuf;

/// Model written into freshly scaffolded configs when none is given
pub const DEFAULT_MODEL: &str = "openrouter/meta-llama/llama-3.3-70b-instruct";

/// ScaffoldRequest - input of the project scaffolding use case
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Directory the project files are created in
    pub target_dir: PathBuf,
    /// Model identifier substituted into the config template
    pub model: String,
    /// Overwrite files that already exist
    pub force: bool,
}

impl ScaffoldRequest {
    pub fn new(target_dir: PathBuf, model: String, force: bool) -> Self {
        Self {
            target_dir,
            model,
            force,
        }
    }
}
