//! Optimization planning - settings, dataset partitioning, work estimates
//! and the pre-optimization summary
pub mod auto_mode;
pub mod dataset;
pub mod plan;
pub mod settings;
pub mod summary;

pub use auto_mode::{AutoMode, OptimizerIntensity};
pub use dataset::{DatasetSizes, DatasetSplit};
pub use plan::OptimizationPlan;
pub use settings::OptimizationSettings;
pub use summary::PreOptimizationSummary;
