use std::io::Write;

/// ProgressReporter port for reporting progress during operations
///
/// Status messages and the live progress bar go through this port so the
/// use cases never write to the terminal directly.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);

    /// Sink a live progress bar should be drawn on
    ///
    /// Each call hands out a fresh writer; one bar is drawn per writer.
    fn progress_writer(&self) -> Box<dyn Write + '_>;
}
