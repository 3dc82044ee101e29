//! Single-step execution.
//!
//! The executor's job is isolation of failure, not isolation of side
//! effects: actions are expected to mutate the host system. Any raised
//! fault (an `Err` or a panic) is normalized into a `Failed` result;
//! nothing propagates out.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use chrono::Utc;

use super::report::StepResult;
use super::step::Step;

/// Execute one step, capturing its outcome.
///
/// No retry decisions are made here; retries, if desired, belong inside
/// the action that knows whether its failure is retriable.
pub fn execute(step: &mut Step) -> StepResult {
    let started_at = Utc::now();
    tracing::debug!(step = %step.name, "executing step");

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| step.invoke()));
    let ended_at = Utc::now();

    match outcome {
        Ok(Ok(())) => {
            tracing::debug!(step = %step.name, "step succeeded");
            StepResult::succeeded(step, started_at, ended_at)
        }
        Ok(Err(e)) => {
            tracing::warn!(step = %step.name, error = %e, "step failed");
            StepResult::failed(step, started_at, ended_at, e.to_string())
        }
        Err(payload) => {
            let detail = panic_detail(payload.as_ref());
            tracing::warn!(step = %step.name, error = %detail, "step raised a fault");
            StepResult::failed(step, started_at, ended_at, detail)
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected fault in step action".to_string()
    }
}
