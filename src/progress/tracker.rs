use super::render::render_line;
use super::scope::ProgressGuard;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

/// Label used when the caller does not provide one
pub const DEFAULT_DESCRIPTION: &str = "Progress";

/// ProgressTracker - live single-line progress bar for long-running work
///
/// Counts steps towards a fixed total and redraws one terminal line on every
/// update, carriage-return style. Once the count reaches the total, the line
/// is terminated with a newline so later output starts fresh.
///
/// The tracker never fails: a zero total suppresses output, overshooting or
/// negative counts produce out-of-range but harmless output, and write errors
/// on the sink are dropped.
///
/// # Example
///
/// ```no_run
/// use prompt_ops::progress::ProgressTracker;
///
/// let mut tracker = ProgressTracker::new(3, "Evaluating");
/// for _ in 0..3 {
///     // ... one unit of work ...
///     tracker.update(None);
/// }
/// ```
pub struct ProgressTracker<W: Write = Stdout> {
    total_steps: i64,
    current_step: i64,
    description: String,
    start_time: Instant,
    writer: W,
}

impl ProgressTracker<Stdout> {
    /// Creates a tracker that draws on standard output
    pub fn new(total_steps: i64, description: impl Into<String>) -> Self {
        Self::with_writer(total_steps, description, io::stdout())
    }

    /// Creates a stdout tracker labelled with [`DEFAULT_DESCRIPTION`]
    pub fn with_total(total_steps: i64) -> Self {
        Self::new(total_steps, DEFAULT_DESCRIPTION)
    }
}

impl<W: Write> ProgressTracker<W> {
    /// Creates a tracker that draws on the given sink
    pub fn with_writer(total_steps: i64, description: impl Into<String>, writer: W) -> Self {
        Self {
            total_steps,
            current_step: 0,
            description: description.into(),
            start_time: Instant::now(),
            writer,
        }
    }

    /// Moves to `step` if given, otherwise advances by one, then redraws
    ///
    /// No bounds are enforced: `step` may be lower than the current position
    /// or beyond the total.
    pub fn update(&mut self, step: Option<i64>) {
        match step {
            Some(step) => self.current_step = step,
            None => self.current_step = self.current_step.saturating_add(1),
        }

        self.display();
    }

    /// Advances by one step
    pub fn tick(&mut self) {
        self.update(None);
    }

    /// Jumps to an explicit step
    pub fn set(&mut self, step: i64) {
        self.update(Some(step));
    }

    /// Drives the bar to the total if it has not got there yet
    pub fn finish(&mut self) {
        if self.current_step < self.total_steps {
            self.update(Some(self.total_steps));
        }
    }

    /// Wraps the tracker in a guard that calls [`finish`](Self::finish) when dropped
    pub fn finish_on_drop(self) -> ProgressGuard<W> {
        ProgressGuard::new(self)
    }

    pub fn total_steps(&self) -> i64 {
        self.total_steps
    }

    pub fn current_step(&self) -> i64 {
        self.current_step
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the count has reached (or passed) the total
    pub fn is_complete(&self) -> bool {
        self.current_step >= self.total_steps
    }

    /// Time since the tracker was created
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the sink, consuming the tracker
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn display(&mut self) {
        let Some(line) = render_line(
            &self.description,
            self.current_step,
            self.total_steps,
            self.elapsed(),
        ) else {
            return;
        };

        if let Err(e) = self.write_line(&line) {
            log::debug!("progress output for '{}' dropped: {}", self.description, e);
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        if self.is_complete() {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()
    }
}

impl<W: Write> std::fmt::Debug for ProgressTracker<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("total_steps", &self.total_steps)
            .field("current_step", &self.current_step)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
