use crate::optimization::{DatasetSplit, OptimizationSettings};
use std::path::PathBuf;

/// PlanRequest - input of the optimization planning use case
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    pub settings: OptimizationSettings,
    /// Dataset to partition; without one all partitions are empty
    pub dataset_path: Option<PathBuf>,
    pub split: DatasetSplit,
}

impl PlanRequest {
    pub fn new(
        settings: OptimizationSettings,
        dataset_path: Option<PathBuf>,
        split: DatasetSplit,
    ) -> Self {
        Self {
            settings,
            dataset_path,
            split,
        }
    }
}
