//! prompt-ops - prompt optimization planning and project scaffolding
//!
//! This library provides the pieces that surround a prompt optimization run:
//! a live terminal progress tracker, the pre-optimization plan and summary,
//! YAML project configuration, and scaffolding of new projects, following
//! hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Progress** (`progress`): Terminal progress tracker and scoped finalization
//! - **Optimization** (`optimization`): Settings, dataset split, plan and summary
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use prompt_ops::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let written = track_progress(3, "Evaluating", |tracker| -> Result<usize> {
//!     let mut done = 0;
//!     for _ in 0..3 {
//!         done += 1;
//!         tracker.tick();
//!     }
//!     Ok(done)
//! })?;
//! assert_eq!(written, 3);
//!
//! let use_case = PlanOptimizationUseCase::new(FileSystemReader::new(), StdoutPresenter::new());
//! let summary = use_case.execute(&PlanRequest::default());
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod optimization;
pub mod ports;
pub mod progress;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemProjectWriter, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::templates::{DirectoryTemplates, EmbeddedTemplates};
    pub use crate::application::dto::{
        OutputFormat, PlanRequest, PlanResponse, ScaffoldRequest, ScaffoldResponse,
    };
    pub use crate::application::services::TemplateStore;
    pub use crate::application::use_cases::{PlanOptimizationUseCase, ScaffoldProjectUseCase};
    pub use crate::config::{discover_config, load_config_from_path, ConfigFile};
    pub use crate::optimization::{
        AutoMode, DatasetSizes, DatasetSplit, OptimizationPlan, OptimizationSettings,
        OptimizerIntensity, PreOptimizationSummary,
    };
    pub use crate::ports::outbound::{
        BaselineScorer, DatasetReader, OutputPresenter, ProgressReporter, ProjectWriter,
        TemplateSource,
    };
    pub use crate::progress::{
        track_progress, track_progress_with_writer, ProgressGuard, ProgressTracker,
    };
    pub use crate::shared::Result;
}
