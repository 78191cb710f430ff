use crate::shared::Result;

/// Name of the project config template
pub const CONFIG_TEMPLATE: &str = "sample_config.yaml";

/// Name of the sample dataset template
pub const DATASET_TEMPLATE: &str = "sample_dataset.json";

/// Name of the sample system prompt template
pub const PROMPT_TEMPLATE: &str = "sample_prompt.txt";

/// TemplateSource port for loading scaffolding templates
///
/// Implementations may serve templates compiled into the binary or read
/// them from a directory.
pub trait TemplateSource {
    /// Returns the raw text of the template called `name`
    ///
    /// # Errors
    /// Returns an error if the template does not exist or cannot be read
    fn read_template(&self, name: &str) -> Result<String>;
}
