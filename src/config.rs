//! Configuration file support for prompt-ops.
//!
//! Provides YAML-based project configuration through `prompt-ops.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::PlanRequest;
use crate::optimization::{DatasetSplit, OptimizationSettings};
use crate::shared::error::PromptOpsError;
use crate::shared::security::read_checked;
use crate::shared::Result;

/// File name looked up in a project directory
pub const CONFIG_FILENAME: &str = "prompt-ops.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub system_prompt: Option<PromptSection>,
    pub dataset: Option<DatasetSection>,
    pub model: Option<ModelSection>,
    pub metric: Option<MetricSection>,
    pub optimization: Option<OptimizationSettings>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Where the prompt being optimized comes from.
#[derive(Debug, Deserialize)]
pub struct PromptSection {
    pub file: Option<PathBuf>,
    pub text: Option<String>,
}

/// Dataset location, field mapping and split fractions.
#[derive(Debug, Deserialize)]
pub struct DatasetSection {
    pub path: PathBuf,
    /// A field name or a path of nested field names
    pub input_field: Option<serde_yaml_ng::Value>,
    pub golden_output_field: Option<String>,
    pub train_size: Option<f64>,
    pub validation_size: Option<f64>,
}

/// Models driving the optimization.
#[derive(Debug, Deserialize)]
pub struct ModelSection {
    /// Shorthand used for both roles when they are not set individually
    pub name: Option<String>,
    pub task_model: Option<String>,
    pub proposer_model: Option<String>,
}

/// Metric used to score candidate prompts.
#[derive(Debug, Deserialize)]
pub struct MetricSection {
    pub class: Option<String>,
}

impl ConfigFile {
    /// Optimization settings with model and metric sections folded in
    ///
    /// Values set directly under `optimization` win over the top-level
    /// `model` and `metric` sections.
    pub fn optimization_settings(&self) -> OptimizationSettings {
        let mut settings = self.optimization.clone().unwrap_or_default();

        if let Some(model) = &self.model {
            let shared = model.name.as_ref();
            if settings.task_model.is_none() {
                settings.task_model = model.task_model.as_ref().or(shared).cloned();
            }
            if settings.proposer_model.is_none() {
                settings.proposer_model = model.proposer_model.as_ref().or(shared).cloned();
            }
        }
        if settings.metric.is_none() {
            settings.metric = self.metric.as_ref().and_then(|m| m.class.clone());
        }

        settings
    }

    pub fn dataset_split(&self) -> DatasetSplit {
        let defaults = DatasetSplit::default();
        match &self.dataset {
            Some(dataset) => DatasetSplit {
                train_fraction: dataset.train_size.unwrap_or(defaults.train_fraction),
                validation_fraction: dataset
                    .validation_size
                    .unwrap_or(defaults.validation_fraction),
            },
            None => defaults,
        }
    }

    /// Dataset path, resolved against `base_dir` when relative
    pub fn dataset_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.dataset.as_ref().map(|dataset| base_dir.join(&dataset.path))
    }

    /// Builds the planning request for a config located in `base_dir`
    pub fn plan_request(&self, base_dir: &Path) -> PlanRequest {
        PlanRequest::new(
            self.optimization_settings(),
            self.dataset_path(base_dir),
            self.dataset_split(),
        )
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(PromptOpsError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config).with_context(|| {
        format!("Invalid config file: {}", path.display())
    })?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.optimization_settings().validate()?;
    config.dataset_split().validate()?;

    if let Some(dataset) = &config.dataset {
        if dataset.path.as_os_str().is_empty() {
            return Err(PromptOpsError::Validation {
                message: "dataset.path must not be empty".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored", key);
    }
}
