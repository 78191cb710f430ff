use crate::ports::outbound::{TemplateSource, CONFIG_TEMPLATE, DATASET_TEMPLATE, PROMPT_TEMPLATE};
use crate::shared::error::PromptOpsError;
use crate::shared::Result;

/// Templates shipped inside the binary
const TEMPLATES: &[(&str, &str)] = &[
    (
        CONFIG_TEMPLATE,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/sample_config.yaml")),
    ),
    (
        DATASET_TEMPLATE,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/sample_dataset.json")),
    ),
    (
        PROMPT_TEMPLATE,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/sample_prompt.txt")),
    ),
];

/// EmbeddedTemplates adapter serving the built-in scaffolding templates
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Names of all built-in templates
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(name, _)| *name)
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn read_template(&self, name: &str) -> Result<String> {
        TEMPLATES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, content)| content.to_string())
            .ok_or_else(|| {
                PromptOpsError::TemplateNotFound {
                    name: name.to_string(),
                    details: "no built-in template with this name".to_string(),
                }
                .into()
            })
    }
}
