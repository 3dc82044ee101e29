//! Sequential pipeline execution.
//!
//! Steps run strictly in declaration order, one at a time: most
//! provisioning actions drive a package manager that is not safe to run
//! concurrently against shared system state. There is no reordering and
//! no parallelism; the pipeline blocks on each action and on each prompt.

use tracing::{info, warn};

use crate::ui::Prompt;

use super::executor;
use super::report::{PipelineReport, StepResult};
use super::step::{SkipReason, Step, StepState};

/// Progress events emitted while the pipeline runs.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A step is about to execute (confirmation, if any, already given).
    StepStarting {
        name: &'a str,
        index: usize,
        total: usize,
    },
    /// A step reached a terminal state.
    StepFinished { result: &'a StepResult },
}

/// Runs an ordered sequence of steps to completion.
pub struct Pipeline;

impl Pipeline {
    /// Run the steps, returning one result per declared step.
    ///
    /// A declined confirmation records `Skipped` and moves on. A failed
    /// mandatory step stops execution: every unexecuted step is recorded
    /// `Skipped` with the prior-failure reason, and their actions are
    /// never invoked. A failed optional step is recorded and the run
    /// continues. No fault escapes this function.
    pub fn run(steps: Vec<Step>, prompt: &mut dyn Prompt) -> PipelineReport {
        Self::run_with_progress(steps, prompt, |_| {})
    }

    /// Run the steps with a progress callback for display purposes.
    pub fn run_with_progress(
        mut steps: Vec<Step>,
        prompt: &mut dyn Prompt,
        mut on_progress: impl FnMut(RunProgress<'_>),
    ) -> PipelineReport {
        let total = steps.len();
        let mut report = PipelineReport::new();
        let mut aborted = false;

        for (index, step) in steps.iter_mut().enumerate() {
            if aborted {
                let result = StepResult::skipped(step, SkipReason::PriorFailure);
                on_progress(RunProgress::StepFinished { result: &result });
                report.push(result);
                continue;
            }

            if step.requires_confirmation {
                let question = format!("{}?", step.name);
                let answer = prompt.confirm(&question, step.confirm_default);
                if !answer.is_yes() {
                    info!(step = %step.name, "operator declined");
                    let result = StepResult::skipped(step, SkipReason::Declined);
                    on_progress(RunProgress::StepFinished { result: &result });
                    report.push(result);
                    continue;
                }
            }

            on_progress(RunProgress::StepStarting {
                name: &step.name,
                index,
                total,
            });

            let result = executor::execute(step);
            if result.state == StepState::Failed && !step.optional {
                warn!(step = %step.name, "mandatory step failed, aborting remaining steps");
                aborted = true;
            }
            on_progress(RunProgress::StepFinished { result: &result });
            report.push(result);
        }

        report
    }
}
