use crate::application::dto::{ScaffoldRequest, ScaffoldResponse};
use crate::application::services::TemplateStore;
use crate::config::CONFIG_FILENAME;
use crate::ports::outbound::{
    ProgressReporter, ProjectWriter, TemplateSource, DATASET_TEMPLATE, PROMPT_TEMPLATE,
};
use crate::progress::track_progress_with_writer;
use crate::shared::error::PromptOpsError;
use crate::shared::Result;
use std::path::PathBuf;

/// Location of the sample dataset inside a scaffolded project
pub const DATASET_FILE: &str = "data/dataset.json";

/// Location of the system prompt inside a scaffolded project
pub const PROMPT_FILE: &str = "prompts/prompt.txt";

/// ScaffoldProjectUseCase - creates a ready-to-edit prompt-ops project
///
/// Renders the config, dataset and prompt templates and writes them into
/// the target directory, drawing one progress step per file.
///
/// # Type Parameters
/// * `TS` - TemplateSource implementation
/// * `PW` - ProjectWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct ScaffoldProjectUseCase<TS, PW, PR> {
    templates: TemplateStore<TS>,
    project_writer: PW,
    progress_reporter: PR,
}

impl<TS, PW, PR> ScaffoldProjectUseCase<TS, PW, PR>
where
    TS: TemplateSource,
    PW: ProjectWriter,
    PR: ProgressReporter,
{
    /// Creates a new ScaffoldProjectUseCase with injected dependencies
    pub fn new(template_source: TS, project_writer: PW, progress_reporter: PR) -> Self {
        Self {
            templates: TemplateStore::new(template_source),
            project_writer,
            progress_reporter,
        }
    }

    /// Executes the scaffolding use case
    ///
    /// All templates are rendered and checked, and existing files are
    /// detected, before anything is written.
    pub fn execute(&self, request: ScaffoldRequest) -> Result<ScaffoldResponse> {
        // Step 1: Render templates
        let files = self.render_files(&request)?;

        // Step 2: Refuse to clobber existing files
        if !request.force {
            self.ensure_no_conflicts(&files)?;
        }

        // Step 3: Write files
        self.progress_reporter.report(&format!(
            "📁 Scaffolding project in: {}",
            request.target_dir.display()
        ));
        let written = self.write_files(files)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Created {} file(s). Edit {} to get started.",
            written.len(),
            CONFIG_FILENAME
        ));

        Ok(ScaffoldResponse { written })
    }

    fn render_files(&self, request: &ScaffoldRequest) -> Result<Vec<(PathBuf, String)>> {
        let model = request.model.trim();
        if model.is_empty() {
            return Err(PromptOpsError::Validation {
                message: "model must not be empty".to_string(),
            }
            .into());
        }

        // Parse once so a broken template fails before anything is written
        self.templates.config_template(model)?;
        self.templates.sample_dataset()?;

        let target = &request.target_dir;
        Ok(vec![
            (
                target.join(CONFIG_FILENAME),
                self.templates.render_config(model)?,
            ),
            (
                target.join(DATASET_FILE),
                self.templates.template_content(DATASET_TEMPLATE)?,
            ),
            (
                target.join(PROMPT_FILE),
                self.templates.template_content(PROMPT_TEMPLATE)?,
            ),
        ])
    }

    fn ensure_no_conflicts(&self, files: &[(PathBuf, String)]) -> Result<()> {
        match files
            .iter()
            .find(|(path, _)| self.project_writer.exists(path))
        {
            Some((path, _)) => Err(PromptOpsError::FileExists { path: path.clone() }.into()),
            None => Ok(()),
        }
    }

    fn write_files(&self, files: Vec<(PathBuf, String)>) -> Result<Vec<PathBuf>> {
        let total = files.len() as i64;
        let writer = self.progress_reporter.progress_writer();

        let result: Result<Vec<PathBuf>> = track_progress_with_writer(total, "Scaffolding", writer, |tracker| {
            let mut written = Vec::with_capacity(files.len());
            for (path, content) in files {
                self.project_writer.write_file(&path, &content)?;
                written.push(path);
                tracker.tick();
            }
            Ok(written)
        });

        if let Err(e) = &result {
            self.progress_reporter
                .report_error(&format!("❌ Scaffolding stopped: {}", e));
        }
        result
    }
}
