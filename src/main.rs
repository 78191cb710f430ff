mod cli;

use cli::{Args, Command};
use owo_colors::OwoColorize;
use prompt_ops::adapters::outbound::console::ConsoleProgressReporter;
use prompt_ops::adapters::outbound::filesystem::{FileSystemProjectWriter, FileSystemReader};
use prompt_ops::adapters::outbound::templates::{DirectoryTemplates, EmbeddedTemplates};
use prompt_ops::application::dto::{OutputFormat, ScaffoldRequest};
use prompt_ops::application::factories::{PresenterFactory, PresenterType};
use prompt_ops::application::use_cases::{PlanOptimizationUseCase, ScaffoldProjectUseCase};
use prompt_ops::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use prompt_ops::ports::outbound::TemplateSource;
use prompt_ops::shared::error::{ExitCode, PromptOpsError};
use prompt_ops::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();

    match args.command {
        Command::Init {
            dir,
            model,
            templates,
            force,
        } => {
            let target_dir = dir.unwrap_or_else(|| PathBuf::from("."));
            if target_dir.exists() {
                validate_project_path(&target_dir)?;
            }

            let request = ScaffoldRequest::new(target_dir, model, force);
            match templates {
                Some(root) => {
                    validate_project_path(&root)?;
                    scaffold(DirectoryTemplates::new(root), request)
                }
                None => scaffold(EmbeddedTemplates::new(), request),
            }
        }
        Command::Plan {
            path,
            config,
            format,
            json,
            output,
        } => {
            let (config, base_dir) = load_plan_config(path, config)?;
            let format = if json { OutputFormat::Json } else { format };
            plan(&config, &base_dir, format, output)
        }
    }
}

fn scaffold<TS: TemplateSource>(templates: TS, request: ScaffoldRequest) -> Result<()> {
    // Create use case with injected dependencies
    let use_case = ScaffoldProjectUseCase::new(
        templates,
        FileSystemProjectWriter::new(),
        ConsoleProgressReporter::new(),
    );

    let response = use_case.execute(request)?;
    for path in &response.written {
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

/// Loads the config named on the command line, or discovers it in the project
///
/// Relative paths inside the config resolve against the directory holding it.
fn load_plan_config(
    path: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(ConfigFile, PathBuf)> {
    if let Some(config_path) = config {
        let loaded = load_config_from_path(&config_path)?;
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        return Ok((loaded, base_dir));
    }

    let project_path = path.unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    match discover_config(&project_path)? {
        Some(loaded) => Ok((loaded, project_path)),
        None => Err(PromptOpsError::ConfigNotFound {
            path: project_path.join(CONFIG_FILENAME),
        }
        .into()),
    }
}

fn plan(
    config: &ConfigFile,
    base_dir: &Path,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let presenter = PresenterFactory::create(PresenterType::from_output(output));
    let use_case = PlanOptimizationUseCase::new(FileSystemReader::new(), presenter);

    let response = use_case.create_summary(&config.plan_request(base_dir))?;
    response.summary.log();
    use_case.present(&response, format)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PromptOpsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| PromptOpsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(PromptOpsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(PromptOpsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
