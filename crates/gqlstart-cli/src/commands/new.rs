//! Implementation of the `gqlstart new` command.
//!
//! Responsibility: turn arguments and config into a scaffold request, run the
//! orchestrator with the real adapters, and report the outcome. No business
//! logic lives here.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use gqlstart_adapters::{
    CommandGenerator, CommandSpec, LocalFilesystem, OutputMode, PackageManager,
    PackageManagerInstaller,
};
use gqlstart_core::{
    application::{DirectoryValidator, ScaffoldOrchestrator, ScaffoldOutcome, ScaffoldRequest},
    domain::{ScaffoldConfig, Stage},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `gqlstart new` command.
///
/// 1. Resolve the target directory (default: current directory)
/// 2. Resolve the template (flag, then config default)
/// 3. Classify the target and refuse a conflict unless `--force`
/// 4. Early-exit if `--dry-run`
/// 5. Materialize, generate, install
/// 6. Report; any recorded failure becomes the exit status
#[instrument(skip_all, fields(dir = ?args.dir, template = ?args.template))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    let target_path = absolutize(&cwd, args.dir.as_deref());

    let service = super::template_service(&config)?;
    let template = service.resolve(Some(requested_template(&args, &config)))?;

    let scaffold_config = scaffold_config(&args, &config);
    let filesystem = LocalFilesystem::new();
    let target = DirectoryValidator::new(&filesystem).classify(&target_path);
    debug!(state = %target.state(), "Target classified");

    let request = ScaffoldRequest::new(template, target, scaffold_config, args.force)?;
    if request.target().is_conflicting() {
        output.warning(&format!(
            "{} is not empty; existing files may be overwritten",
            target_path.display()
        ))?;
    }

    let mode = if output.is_json() || global.quiet {
        OutputMode::Capture
    } else {
        OutputMode::Inherit
    };
    let generator = build_generator(&config, scaffold_config)?.with_output(mode);
    let installer = build_installer(&config, scaffold_config)?.with_output(mode);
    let manager = installer.manager();

    if args.dry_run {
        return show_plan(&request, generator.command(), manager, &output);
    }

    if !output.is_json() {
        output.header(&format!(
            "Creating a new GraphQL server in {}",
            target_path.display()
        ))?;
        output.info(&format!("Using template '{}'", template.name()))?;
    }

    let orchestrator =
        ScaffoldOrchestrator::new(Box::new(filesystem), Box::new(generator), Box::new(installer));
    let outcome = orchestrator.execute(request);
    info!(run_id = %outcome.run_id(), stage = %outcome.stage(), "Scaffold finished");

    let steps = StepReport::from_outcome(&outcome, scaffold_config);
    if output.is_json() {
        let report = NewReport {
            run_id: outcome.run_id(),
            template: template.name(),
            target: &target_path,
            stage: outcome.stage().as_str(),
            files_written: outcome.files_written(),
            steps,
            error: outcome.error().map(ToString::to_string),
            generation_error: outcome.generation_error().map(ToString::to_string),
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            gqlstart_core::error::GqlError::Internal {
                message: format!("Failed to serialise report: {e}"),
            }
        })?;
        output.data(&json)?;
    } else {
        report_steps(&outcome, &steps, manager, &output)?;
    }

    if let Some(err) = outcome.error() {
        return Err(err.clone().into());
    }
    if let Some(err) = outcome.generation_error() {
        return Err(err.clone().into());
    }

    if !output.is_json() {
        next_steps(args.dir.as_deref(), &steps, manager, &output)?;
    }
    Ok(())
}

// ── Request assembly ──────────────────────────────────────────────────────────

/// `dir` resolved against `cwd`, with `.` segments dropped.
fn absolutize(cwd: &Path, dir: Option<&Path>) -> PathBuf {
    let joined = match dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn requested_template<'a>(args: &'a NewArgs, config: &'a AppConfig) -> &'a str {
    args.template
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(&config.defaults.template)
}

fn scaffold_config(args: &NewArgs, config: &AppConfig) -> ScaffoldConfig {
    ScaffoldConfig::new(
        config.defaults.install && !args.no_install,
        config.defaults.generate && !args.no_generate,
    )
}

/// Configured generator; the command is only parsed when generation runs.
fn build_generator(config: &AppConfig, scaffold: ScaffoldConfig) -> CliResult<CommandGenerator> {
    if !scaffold.generate_models() {
        return Ok(CommandGenerator::default());
    }
    let command = CommandSpec::from_argv(&config.commands.generate)?;
    Ok(CommandGenerator::new(command))
}

/// Configured installer; `package_manager` is only parsed when install runs.
fn build_installer(
    config: &AppConfig,
    scaffold: ScaffoldConfig,
) -> CliResult<PackageManagerInstaller> {
    let package_manager = if scaffold.install_dependencies() {
        config
            .commands
            .package_manager
            .as_deref()
            .map(str::parse::<PackageManager>)
            .transpose()?
    } else {
        None
    };
    Ok(PackageManagerInstaller::configured(package_manager))
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum StepStatus {
    Done,
    Failed,
    Skipped,
    NotReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct StepReport {
    materialize: StepStatus,
    generate: StepStatus,
    install: StepStatus,
}

impl StepReport {
    fn from_outcome(outcome: &ScaffoldOutcome, config: ScaffoldConfig) -> Self {
        let failed_at = outcome.error().and_then(|e| e.stage());
        let materialized = failed_at != Some(Stage::Materialize);

        let materialize = if materialized {
            StepStatus::Done
        } else {
            StepStatus::Failed
        };

        let generate = if !config.generate_models() {
            StepStatus::Skipped
        } else if !materialized {
            StepStatus::NotReached
        } else if outcome.generation_error().is_some() || failed_at == Some(Stage::Generate) {
            StepStatus::Failed
        } else {
            StepStatus::Done
        };

        let install = if !config.install_dependencies() {
            StepStatus::Skipped
        } else if !materialized {
            StepStatus::NotReached
        } else if failed_at == Some(Stage::Install) {
            StepStatus::Failed
        } else {
            StepStatus::Done
        };

        Self {
            materialize,
            generate,
            install,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewReport<'a> {
    run_id: Uuid,
    template: &'a str,
    target: &'a Path,
    stage: &'static str,
    files_written: usize,
    steps: StepReport,
    error: Option<String>,
    generation_error: Option<String>,
}

fn report_steps(
    outcome: &ScaffoldOutcome,
    steps: &StepReport,
    manager: PackageManager,
    output: &OutputManager,
) -> CliResult<()> {
    if steps.materialize == StepStatus::Done {
        output.success(&format!(
            "Copied template files ({})",
            outcome.files_written()
        ))?;
    }
    match steps.generate {
        StepStatus::Done => output.success("Generated models")?,
        StepStatus::Failed => output.error("Model generation failed")?,
        StepStatus::Skipped | StepStatus::NotReached => {}
    }
    match steps.install {
        StepStatus::Done => output.success(&format!("Installed dependencies with {manager}"))?,
        StepStatus::Failed => output.error("Dependency installation failed")?,
        StepStatus::Skipped | StepStatus::NotReached => {}
    }
    Ok(())
}

fn next_steps(
    dir: Option<&Path>,
    steps: &StepReport,
    manager: PackageManager,
    output: &OutputManager,
) -> CliResult<()> {
    output.print("")?;
    output.print("Next steps:")?;
    if let Some(dir) = dir.filter(|d| *d != Path::new(".")) {
        output.print(&format!("  cd {}", dir.display()))?;
    }
    if steps.install == StepStatus::Skipped {
        output.print(&format!("  {manager} install"))?;
    }
    if steps.generate == StepStatus::Skipped {
        output.print("  npx graphqlgen")?;
    }
    output.print(&format!("  {manager} start"))?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct Plan<'a> {
    dry_run: bool,
    template: &'a str,
    target: &'a Path,
    state: String,
    generate: Option<String>,
    install: Option<String>,
}

fn show_plan(
    request: &ScaffoldRequest<'_>,
    generator: &CommandSpec,
    manager: PackageManager,
    output: &OutputManager,
) -> CliResult<()> {
    let config = request.config();
    let plan = Plan {
        dry_run: true,
        template: request.template().name(),
        target: request.target().path(),
        state: request.target().state().to_string(),
        generate: config.generate_models().then(|| generator.to_string()),
        install: config
            .install_dependencies()
            .then(|| manager.install_command().to_string()),
    };

    if output.is_json() {
        let json = serde_json::to_string_pretty(&plan).map_err(|e| {
            gqlstart_core::error::GqlError::Internal {
                message: format!("Failed to serialise plan: {e}"),
            }
        })?;
        output.data(&json)?;
        return Ok(());
    }

    output.header("Dry run: nothing will be written")?;
    output.info(&format!(
        "Template: {} ({})",
        plan.template,
        request.template().source().label()
    ))?;
    output.info(&format!("Target:   {} ({})", plan.target.display(), plan.state))?;
    output.info(&format!(
        "Generate: {}",
        plan.generate.as_deref().unwrap_or("skipped")
    ))?;
    output.info(&format!(
        "Install:  {}",
        plan.install.as_deref().unwrap_or("skipped")
    ))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
