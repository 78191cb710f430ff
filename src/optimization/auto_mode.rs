use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-facing optimization preset
///
/// The optimizer itself speaks in intensities (`light`, `medium`, `heavy`);
/// those names are accepted here as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AutoMode {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

/// Intensity understood by the DSPy optimizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizerIntensity {
    Light,
    Medium,
    Heavy,
}

impl AutoMode {
    /// Maps the preset onto the optimizer's intensity
    pub fn intensity(self) -> OptimizerIntensity {
        match self {
            AutoMode::Basic => OptimizerIntensity::Light,
            AutoMode::Intermediate => OptimizerIntensity::Medium,
            AutoMode::Advanced => OptimizerIntensity::Heavy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AutoMode::Basic => "basic",
            AutoMode::Intermediate => "intermediate",
            AutoMode::Advanced => "advanced",
        }
    }
}

impl OptimizerIntensity {
    /// Number of trials the optimizer runs when none is configured
    pub fn default_trials(self) -> u32 {
        match self {
            OptimizerIntensity::Light => 7,
            OptimizerIntensity::Medium => 12,
            OptimizerIntensity::Heavy => 20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizerIntensity::Light => "light",
            OptimizerIntensity::Medium => "medium",
            OptimizerIntensity::Heavy => "heavy",
        }
    }
}

impl FromStr for AutoMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "light" => Ok(AutoMode::Basic),
            "intermediate" | "medium" => Ok(AutoMode::Intermediate),
            "advanced" | "heavy" => Ok(AutoMode::Advanced),
            _ => Err(format!(
                "Invalid auto mode: {}. Please specify 'basic', 'intermediate' or 'advanced'",
                s
            )),
        }
    }
}

impl TryFrom<String> for AutoMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AutoMode> for String {
    fn from(mode: AutoMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for AutoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OptimizerIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
