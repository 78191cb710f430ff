use crate::optimization::{OptimizationPlan, PreOptimizationSummary};
use serde::Serialize;

/// PlanResponse - work estimate plus the summary handed to the optimizer
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub plan: OptimizationPlan,
    pub summary: PreOptimizationSummary,
}
