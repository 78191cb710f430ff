use super::auto_mode::{AutoMode, OptimizerIntensity};
use super::dataset::DatasetSizes;
use super::settings::OptimizationSettings;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Fixed cost of generating instructions for one trial, in seconds
pub const INSTRUCTION_OVERHEAD_SECS: f64 = 10.0;

const RULE_WIDTH: usize = 60;

/// Work estimate shown to the user before an optimization run starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationPlan {
    pub auto: AutoMode,
    pub intensity: OptimizerIntensity,
    pub num_trials: u32,
    pub sizes: DatasetSizes,
    pub total_evaluations: u64,
    pub num_threads: u32,
    /// How long the baseline evaluation over the test set took
    pub baseline_duration: Option<Duration>,
    pub estimated_minutes: Option<f64>,
}

impl OptimizationPlan {
    pub fn new(
        settings: &OptimizationSettings,
        sizes: DatasetSizes,
        baseline_duration: Option<Duration>,
    ) -> Self {
        let num_trials = settings.num_trials();
        let baseline_duration = baseline_duration.filter(|d| !d.is_zero());

        Self {
            auto: settings.auto,
            intensity: settings.auto.intensity(),
            num_trials,
            sizes,
            total_evaluations: u64::from(num_trials) * sizes.validation as u64,
            num_threads: settings.num_threads,
            baseline_duration,
            estimated_minutes: baseline_duration
                .and_then(|baseline| estimate_minutes(num_trials, sizes, baseline)),
        }
    }
}

/// Scales the baseline (measured on the test set) to a validation-set trial
///
/// Needs a non-empty validation set and test set; otherwise there is nothing
/// to extrapolate from.
fn estimate_minutes(num_trials: u32, sizes: DatasetSizes, baseline: Duration) -> Option<f64> {
    if sizes.validation == 0 || sizes.test == 0 {
        return None;
    }

    let time_per_example = baseline.as_secs_f64() / sizes.test as f64;
    let time_per_trial = time_per_example * sizes.validation as f64 + INSTRUCTION_OVERHEAD_SECS;
    Some(f64::from(num_trials) * time_per_trial / 60.0)
}

impl fmt::Display for OptimizationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "OPTIMIZATION PLAN")?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "Mode: {} → DSPy '{}' ({} trials)",
            self.auto, self.intensity, self.num_trials
        )?;
        writeln!(f, "Training examples: {}", self.sizes.train)?;
        writeln!(f, "Validation examples: {}", self.sizes.validation)?;
        writeln!(
            f,
            "Total evaluations: {} ({} trials × {} examples)",
            self.total_evaluations, self.num_trials, self.sizes.validation
        )?;
        writeln!(f, "Parallel threads: {}", self.num_threads)?;
        if let Some(minutes) = self.estimated_minutes {
            writeln!(f, "Estimated time: ~{:.1} minutes", minutes)?;
        } else if let Some(baseline) = self.baseline_duration {
            writeln!(
                f,
                "Baseline eval took {:.1}s - expect ~{} trials of similar duration",
                baseline.as_secs_f64(),
                self.num_trials
            )?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f)
    }
}
