use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use prompt_ops::prelude::*;

/// Mock ProgressReporter for testing that captures messages and bar output
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
    pub bar: Arc<Mutex<Vec<u8>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Everything the progress bar drew, as text
    pub fn bar_output(&self) -> String {
        String::from_utf8(self.bar.lock().unwrap().clone()).unwrap()
    }
}

struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }

    fn progress_writer(&self) -> Box<dyn Write + '_> {
        Box::new(SharedSink(Arc::clone(&self.bar)))
    }
}
