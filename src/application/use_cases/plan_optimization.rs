use crate::application::dto::{OutputFormat, PlanRequest, PlanResponse};
use crate::optimization::{
    DatasetSizes, OptimizationPlan, OptimizationSettings, PreOptimizationSummary,
};
use crate::ports::outbound::{BaselineScorer, DatasetReader, OutputPresenter};
use crate::shared::Result;
use std::time::{Duration, Instant};

/// PlanOptimizationUseCase - builds and presents the pre-optimization plan
///
/// # Type Parameters
/// * `DR` - DatasetReader implementation
/// * `OP` - OutputPresenter implementation
pub struct PlanOptimizationUseCase<DR, OP> {
    dataset_reader: DR,
    presenter: OP,
    baseline_scorer: Option<Box<dyn BaselineScorer>>,
}

impl<DR, OP> PlanOptimizationUseCase<DR, OP>
where
    DR: DatasetReader,
    OP: OutputPresenter,
{
    /// Creates a new PlanOptimizationUseCase with injected dependencies
    pub fn new(dataset_reader: DR, presenter: OP) -> Self {
        Self {
            dataset_reader,
            presenter,
            baseline_scorer: None,
        }
    }

    /// Scorer used when the settings ask for a baseline
    pub fn with_baseline_scorer(mut self, scorer: impl BaselineScorer + 'static) -> Self {
        self.baseline_scorer = Some(Box::new(scorer));
        self
    }

    /// Builds the plan and summary for the request
    ///
    /// # Errors
    /// Returns an error if the settings or split are invalid, or the dataset
    /// cannot be read. A failing baseline scorer is not an error.
    pub fn create_summary(&self, request: &PlanRequest) -> Result<PlanResponse> {
        request.settings.validate()?;
        request.split.validate()?;

        let sizes = self.dataset_sizes(request)?;
        let (baseline_score, baseline_duration) = self.compute_baseline(&request.settings);

        Ok(PlanResponse {
            plan: OptimizationPlan::new(&request.settings, sizes, baseline_duration),
            summary: PreOptimizationSummary::new(&request.settings, sizes, baseline_score),
        })
    }

    /// Presents a previously built plan in the requested format
    pub fn present(&self, response: &PlanResponse, format: OutputFormat) -> Result<()> {
        let content = match format {
            OutputFormat::Text => response.plan.to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(response)? + "\n",
        };
        self.presenter.present(&content)
    }

    /// Builds, presents and logs the summary, never failing
    ///
    /// Any error is logged as a warning and a minimal summary is returned so
    /// the optimization run that asked for it can carry on.
    pub fn execute(&self, request: &PlanRequest) -> PreOptimizationSummary {
        let outcome = self.create_summary(request).and_then(|response| {
            self.present(&response, OutputFormat::Text)?;
            Ok(response.summary)
        });

        match outcome {
            Ok(summary) => {
                summary.log();
                summary
            }
            Err(e) => {
                log::warn!("Failed to create or display pre-optimization summary: {}", e);
                PreOptimizationSummary::minimal()
            }
        }
    }

    fn dataset_sizes(&self, request: &PlanRequest) -> Result<DatasetSizes> {
        let Some(path) = request.dataset_path.as_deref() else {
            return Ok(DatasetSizes::default());
        };

        let total = self.dataset_reader.count_examples(path)?;
        let sizes = request.split.apply(total);
        log::debug!(
            "dataset {} has {} examples: {} train / {} validation / {} test",
            path.display(),
            total,
            sizes.train,
            sizes.validation,
            sizes.test
        );
        Ok(sizes)
    }

    /// Scores the unoptimized prompt and times it, if asked to
    fn compute_baseline(&self, settings: &OptimizationSettings) -> (Option<f64>, Option<Duration>) {
        if !settings.compute_baseline {
            return (None, None);
        }

        let Some(scorer) = &self.baseline_scorer else {
            log::warn!("compute_baseline is enabled but no baseline scorer is available; skipping");
            return (None, None);
        };

        let start = Instant::now();
        match scorer.score() {
            Ok(score) => (Some(score), Some(start.elapsed())),
            Err(e) => {
                log::warn!("Failed to compute baseline score: {}", e);
                (None, None)
            }
        }
    }
}
