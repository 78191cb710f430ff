//! Live terminal progress tracking
//!
//! [`ProgressTracker`] draws a single carriage-return line with a 30-cell bar,
//! percentage, step counts and an ETA. [`track_progress`] and
//! [`ProgressGuard`] make sure the bar always reaches 100% when the work
//! around it ends, however it ends.
pub mod render;
pub mod scope;
pub mod tracker;

pub use scope::{track_progress, track_progress_with_writer, ProgressGuard};
pub use tracker::{ProgressTracker, DEFAULT_DESCRIPTION};
