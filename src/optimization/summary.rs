use super::dataset::DatasetSizes;
use super::settings::OptimizationSettings;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

const UNKNOWN: &str = "Unknown";

/// Snapshot of what an optimization run is about to do
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreOptimizationSummary {
    pub task_model: String,
    pub proposer_model: String,
    pub metric_name: String,
    pub train_size: usize,
    pub val_size: usize,
    pub optimizer_params: BTreeMap<String, Value>,
    pub guidance: Option<String>,
    pub baseline_score: Option<f64>,
    pub generated_at: DateTime<Utc>,
}

impl PreOptimizationSummary {
    pub fn new(
        settings: &OptimizationSettings,
        sizes: DatasetSizes,
        baseline_score: Option<f64>,
    ) -> Self {
        Self {
            task_model: settings
                .task_model
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            proposer_model: settings
                .proposer_model
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            metric_name: settings
                .metric
                .clone()
                .unwrap_or_else(|| "None".to_string()),
            train_size: sizes.train,
            val_size: sizes.validation,
            optimizer_params: settings.optimizer_params(),
            guidance: settings.guidance.clone(),
            baseline_score,
            generated_at: Utc::now(),
        }
    }

    /// Placeholder returned when the real summary could not be produced
    pub fn minimal() -> Self {
        Self {
            task_model: UNKNOWN.to_string(),
            proposer_model: UNKNOWN.to_string(),
            metric_name: UNKNOWN.to_string(),
            train_size: 0,
            val_size: 0,
            optimizer_params: BTreeMap::new(),
            guidance: None,
            baseline_score: None,
            generated_at: Utc::now(),
        }
    }

    /// Emits the summary at info level, one record per line
    pub fn log(&self) {
        for line in self.to_string().lines() {
            log::info!("{}", line);
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for PreOptimizationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Pre-Optimization Summary ===")?;
        writeln!(f, "Task Model       : {}", self.task_model)?;
        writeln!(f, "Proposer Model   : {}", self.proposer_model)?;
        writeln!(f, "Metric           : {}", self.metric_name)?;
        writeln!(f, "Train / Val size : {} / {}", self.train_size, self.val_size)?;

        if !self.optimizer_params.is_empty() {
            let params = self
                .optimizer_params
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "Optimizer Params : {}", params)?;
        }
        if let Some(guidance) = &self.guidance {
            writeln!(f, "Guidance         : {}", guidance)?;
        }
        if let Some(score) = self.baseline_score {
            writeln!(f, "Baseline Score   : {:.4}", score)?;
        }
        Ok(())
    }
}
