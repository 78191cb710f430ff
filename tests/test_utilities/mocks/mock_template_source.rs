use std::collections::HashMap;
use prompt_ops::prelude::*;

/// Mock TemplateSource for testing, serving templates from memory
#[derive(Default)]
pub struct MockTemplateSource {
    templates: HashMap<String, String>,
}

impl MockTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, name: &str, content: &str) -> Self {
        self.templates.insert(name.to_string(), content.to_string());
        self
    }
}

impl TemplateSource for MockTemplateSource {
    fn read_template(&self, name: &str) -> Result<String> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Template not found: {}", name))
    }
}
