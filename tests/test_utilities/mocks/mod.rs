/// Mock implementations for testing
mod mock_dataset_reader;
mod mock_output_presenter;
mod mock_progress_reporter;
mod mock_project_writer;
mod mock_template_source;

pub use mock_dataset_reader::MockDatasetReader;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_writer::MockProjectWriter;
pub use mock_template_source::MockTemplateSource;
