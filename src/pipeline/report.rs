//! Run outcome records.
//!
//! A [`StepResult`] is created by the executor exactly once per step and
//! never mutated afterwards. The [`PipelineReport`] owns the ordered
//! sequence of results for a full run.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::step::{SkipReason, Step, StepState};

/// The outcome of running (or skipping) one step.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Step name.
    pub name: String,
    /// Whether the step was optional.
    pub optional: bool,
    /// Terminal state of the step.
    pub state: StepState,
    /// Error detail, present only when `state` is `Failed`.
    pub error: Option<String>,
    /// When execution started (equals `ended_at` for skipped steps).
    pub started_at: DateTime<Utc>,
    /// When execution ended.
    pub ended_at: DateTime<Utc>,
}

impl StepResult {
    /// Create a success result.
    pub fn succeeded(
        step: &Step,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: step.name.clone(),
            optional: step.optional,
            state: StepState::Succeeded,
            error: None,
            started_at,
            ended_at,
        }
    }

    /// Create a failure result with its captured detail.
    pub fn failed(
        step: &Step,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        error: String,
    ) -> Self {
        Self {
            name: step.name.clone(),
            optional: step.optional,
            state: StepState::Failed,
            error: Some(error),
            started_at,
            ended_at,
        }
    }

    /// Create a skipped result; the action was never invoked.
    pub fn skipped(step: &Step, reason: SkipReason) -> Self {
        let now = Utc::now();
        Self {
            name: step.name.clone(),
            optional: step.optional,
            state: StepState::Skipped(reason),
            error: None,
            started_at: now,
            ended_at: now,
        }
    }

    /// Wall-clock time the step took.
    pub fn duration(&self) -> Duration {
        self.ended_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or_default()
    }

    /// Generate a one-line summary for display.
    pub fn summary_line(&self) -> String {
        match self.state {
            StepState::Succeeded => format!(
                "{} {} ({})",
                self.state.display_char(),
                self.name,
                format_duration(self.duration())
            ),
            StepState::Failed => {
                let error = self.error.as_deref().unwrap_or("unknown error");
                format!("{} {} - {}", self.state.display_char(), self.name, error)
            }
            StepState::Skipped(reason) => {
                format!("{} {} ({})", self.state.display_char(), self.name, reason)
            }
            StepState::Pending => format!("{} {}", self.state.display_char(), self.name),
        }
    }
}

/// The ordered outcome record of a full provisioning run.
///
/// Immutable once the pipeline completes; owned solely by the caller that
/// invoked the pipeline.
#[derive(Debug, Default)]
pub struct PipelineReport {
    results: Vec<StepResult>,
}

impl PipelineReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, result: StepResult) {
        self.results.push(result);
    }

    /// Number of recorded results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// All results, in declaration order.
    pub fn results(&self) -> &[StepResult] {
        &self.results
    }

    /// Results that failed.
    pub fn failures(&self) -> impl Iterator<Item = &StepResult> {
        self.results
            .iter()
            .filter(|r| r.state == StepState::Failed)
    }

    /// Results that were skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &StepResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.state, StepState::Skipped(_)))
    }

    /// A run succeeds when no mandatory step failed.
    pub fn is_success(&self) -> bool {
        !self
            .results
            .iter()
            .any(|r| r.state == StepState::Failed && !r.optional)
    }

    /// Sum of individual step durations.
    pub fn total_duration(&self) -> Duration {
        self.results.iter().map(StepResult::duration).sum()
    }
}

/// Format a duration for display, e.g. `420ms`, `5.3s`, `1m 5s`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{}s", secs, millis / 100)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
