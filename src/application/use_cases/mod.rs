/// Use cases module containing application business logic orchestration
mod plan_optimization;
mod scaffold_project;

pub use plan_optimization::PlanOptimizationUseCase;
pub use scaffold_project::{ScaffoldProjectUseCase, DATASET_FILE, PROMPT_FILE};
