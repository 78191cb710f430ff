use crate::ports::outbound::{TemplateSource, CONFIG_TEMPLATE, DATASET_TEMPLATE};
use crate::shared::error::PromptOpsError;
use crate::shared::Result;

/// Placeholder in the config template replaced by the chosen model
pub const MODEL_PLACEHOLDER: &str = "${MODEL}";

/// TemplateStore - typed access to scaffolding templates
///
/// Wraps any [`TemplateSource`] and knows how to turn the well-known
/// templates into structured values.
pub struct TemplateStore<TS> {
    source: TS,
}

impl<TS: TemplateSource> TemplateStore<TS> {
    pub fn new(source: TS) -> Self {
        Self { source }
    }

    /// Raw text of a template
    pub fn template_content(&self, name: &str) -> Result<String> {
        self.source.read_template(name)
    }

    /// The sample dataset, parsed
    pub fn sample_dataset(&self) -> Result<serde_json::Value> {
        let content = self.template_content(DATASET_TEMPLATE)?;
        serde_json::from_str(&content).map_err(|e| {
            PromptOpsError::TemplateParseError {
                name: DATASET_TEMPLATE.to_string(),
                format: "JSON".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Config template text with every model placeholder substituted
    ///
    /// Comments and layout of the template are preserved, so this is what
    /// gets written to disk when scaffolding.
    pub fn render_config(&self, model: &str) -> Result<String> {
        let content = self.template_content(CONFIG_TEMPLATE)?;
        Ok(content.replace(MODEL_PLACEHOLDER, model))
    }

    /// Config template with the model substituted, parsed
    pub fn config_template(&self, model: &str) -> Result<serde_yaml_ng::Value> {
        let content = self.render_config(model)?;
        serde_yaml_ng::from_str(&content).map_err(|e| {
            PromptOpsError::TemplateParseError {
                name: CONFIG_TEMPLATE.to_string(),
                format: "YAML".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
