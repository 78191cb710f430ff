use crate::shared::Result;

/// BaselineScorer port for scoring the unoptimized prompt
///
/// Implementations evaluate the current prompt on the test set. The caller
/// measures how long that takes to estimate the cost of each trial.
pub trait BaselineScorer {
    fn score(&self) -> Result<f64>;
}
