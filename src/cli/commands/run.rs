//! The `run` command: execute the provisioning pipeline.

use std::path::PathBuf;

use crate::actions::git;
use crate::config;
use crate::error::Result;
use crate::pipeline::{format_duration, Pipeline, PipelineReport, RunProgress, StepState};
use crate::plan;
use crate::preflight;
use crate::privilege::PrivilegeKeeper;
use crate::ui::{Output, ProgressSpinner, Prompt, TerminalPrompt};

use super::{Command, CommandResult};

/// Executes the full provisioning pipeline.
pub struct RunCommand {
    config_path: Option<PathBuf>,
}

impl RunCommand {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }
}

impl Command for RunCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let (path, config) = config::load_discovered(self.config_path.as_deref())?;

        out.header("rigup");
        out.println(&format!("Using configuration {}", path.display()));

        let spinner = ProgressSpinner::new("Checking prerequisites");
        if let Err(e) = preflight::ensure_macos().and_then(|()| preflight::ensure_network()) {
            spinner.finish_error("Prerequisites not satisfied");
            return Err(e);
        }
        spinner.finish_success("Prerequisites satisfied");

        let mut prompt = TerminalPrompt::new();

        // Identity questions happen before the pipeline; the pipeline
        // itself only ever asks yes/no.
        let git_config = config.git.clone().unwrap_or_default();
        let identity = git::resolve_identity(&git_config, &mut prompt);

        // Acquired before the first step, torn down on every exit path
        // of the run (the keeper stops itself when dropped).
        let keeper = PrivilegeKeeper::start()?;

        let steps = plan::build_steps(&config, Some(identity));
        let report = run_pipeline(steps, &mut prompt, out);

        keeper.stop();
        print_report(out, &report);

        if report.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

fn run_pipeline(
    steps: Vec<crate::pipeline::Step>,
    prompt: &mut dyn Prompt,
    out: &mut Output,
) -> PipelineReport {
    Pipeline::run_with_progress(steps, prompt, |event| match event {
        RunProgress::StepStarting { name, index, total } => {
            out.println("");
            out.step_header(index + 1, total, name);
        }
        RunProgress::StepFinished { result } => {
            // Skips for a prior failure are summarized in the report
            // instead of spamming one line per unexecuted step.
            if !matches!(
                result.state,
                StepState::Skipped(crate::pipeline::SkipReason::PriorFailure)
            ) {
                out.println(&result.summary_line());
            }
        }
    })
}

fn print_report(out: &mut Output, report: &PipelineReport) {
    let failures: Vec<_> = report.failures().collect();
    let skipped: Vec<_> = report.skipped().collect();
    let succeeded = report.len() - failures.len() - skipped.len();

    out.println("");
    if !failures.is_empty() {
        out.header("Failed steps");
        for result in &failures {
            out.error(&format!(
                "{}: {}",
                result.name,
                result.error.as_deref().unwrap_or("unknown error")
            ));
        }
        out.println("");
    }
    if !skipped.is_empty() {
        out.header("Skipped steps");
        for result in &skipped {
            out.println(&result.summary_line());
        }
        out.println("");
    }

    out.println(&format!(
        "{} succeeded, {} failed, {} skipped in {}",
        succeeded,
        failures.len(),
        skipped.len(),
        format_duration(report.total_duration())
    ));

    if report.is_success() {
        out.success("Provisioning complete");
    } else {
        out.error("Provisioning stopped on a mandatory failure");
    }
}
