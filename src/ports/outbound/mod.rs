/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, evaluators).
pub mod baseline_scorer;
pub mod dataset_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_writer;
pub mod template_source;

pub use baseline_scorer::BaselineScorer;
pub use dataset_reader::DatasetReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_writer::ProjectWriter;
pub use template_source::{TemplateSource, CONFIG_TEMPLATE, DATASET_TEMPLATE, PROMPT_TEMPLATE};
