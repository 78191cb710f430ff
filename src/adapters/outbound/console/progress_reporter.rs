use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// ConsoleProgressReporter adapter for terminal output
///
/// Status messages go to stderr so they never mix with data written to
/// stdout. Live progress bars are drawn on stdout.
pub struct ConsoleProgressReporter;

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", message.green());
    }

    fn progress_writer(&self) -> Box<dyn Write + '_> {
        Box::new(io::stdout())
    }
}
