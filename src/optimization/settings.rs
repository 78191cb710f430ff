use super::auto_mode::AutoMode;
use crate::shared::error::PromptOpsError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Settings of an optimization run
///
/// Every field has a default, so an empty `optimization:` section (or none at
/// all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationSettings {
    #[serde(alias = "auto_mode")]
    pub auto: AutoMode,
    /// Explicit trial count; estimated from `auto` when absent
    pub num_trials: Option<u32>,
    pub max_labeled_demos: u32,
    pub max_bootstrapped_demos: u32,
    pub num_candidates: u32,
    pub num_threads: u32,
    pub init_temperature: f64,
    pub seed: u64,
    pub task_model: Option<String>,
    pub proposer_model: Option<String>,
    pub metric: Option<String>,
    /// Extra instruction handed to the instruction proposer
    #[serde(alias = "tip")]
    pub guidance: Option<String>,
    pub compute_baseline: bool,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            auto: AutoMode::Basic,
            num_trials: None,
            max_labeled_demos: 5,
            max_bootstrapped_demos: 4,
            num_candidates: 10,
            num_threads: 18,
            init_temperature: 0.5,
            seed: 9,
            task_model: None,
            proposer_model: None,
            metric: None,
            guidance: None,
            compute_baseline: false,
        }
    }
}

impl OptimizationSettings {
    /// Trial count, falling back to the estimate for the configured mode
    pub fn num_trials(&self) -> u32 {
        self.num_trials
            .unwrap_or_else(|| self.auto.intensity().default_trials())
    }

    /// Checks values that would make the optimizer misbehave
    pub fn validate(&self) -> Result<()> {
        if self.num_trials == Some(0) {
            return Err(invalid("num_trials must be at least 1 when set"));
        }
        if self.num_threads == 0 {
            return Err(invalid("num_threads must be at least 1"));
        }
        if self.num_candidates == 0 {
            return Err(invalid("num_candidates must be at least 1"));
        }
        if !self.init_temperature.is_finite() || self.init_temperature < 0.0 {
            return Err(invalid(&format!(
                "init_temperature must be a non-negative number, got {}",
                self.init_temperature
            )));
        }
        Ok(())
    }

    /// Optimizer parameters as reported in the pre-optimization summary
    pub fn optimizer_params(&self) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("auto_user".to_string(), json!(self.auto.as_str())),
            (
                "auto_dspy".to_string(),
                json!(self.auto.intensity().as_str()),
            ),
            (
                "max_labeled_demos".to_string(),
                json!(self.max_labeled_demos),
            ),
            (
                "max_bootstrapped_demos".to_string(),
                json!(self.max_bootstrapped_demos),
            ),
            ("num_candidates".to_string(), json!(self.num_candidates)),
            ("num_threads".to_string(), json!(self.num_threads)),
            ("init_temperature".to_string(), json!(self.init_temperature)),
            ("seed".to_string(), json!(self.seed)),
            ("num_trials".to_string(), json!(self.num_trials())),
        ])
    }
}

fn invalid(message: &str) -> anyhow::Error {
    PromptOpsError::Validation {
        message: message.to_string(),
    }
    .into()
}
