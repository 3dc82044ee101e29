//! Step model definition.

use std::fmt;

use crate::error::Result;
use crate::ui::Answer;

/// The capability a step invokes to perform its work.
///
/// Side-effecting by design; idempotence is the action's own obligation,
/// not something the pipeline guarantees.
pub type Action = Box<dyn FnMut() -> Result<()>>;

/// One declared unit of provisioning work.
pub struct Step {
    /// Human-readable identifier, unique within a run.
    pub name: String,
    /// If true, failure does not abort the pipeline.
    pub optional: bool,
    /// If true, the operator is asked before the action runs.
    pub requires_confirmation: bool,
    /// Default answer offered when asking for confirmation.
    pub confirm_default: Answer,
    action: Action,
}

impl Step {
    /// Create a mandatory, unconditional step.
    pub fn new(name: impl Into<String>, action: impl FnMut() -> Result<()> + 'static) -> Self {
        Self {
            name: name.into(),
            optional: false,
            requires_confirmation: false,
            confirm_default: Answer::Yes,
            action: Box::new(action),
        }
    }

    /// Mark the step optional: failure is recorded, the run continues.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Require operator consent before the action runs.
    pub fn with_confirmation(mut self) -> Self {
        self.requires_confirmation = true;
        self
    }

    /// Change the answer offered when confirmation is requested.
    pub fn confirm_default(mut self, default: Answer) -> Self {
        self.confirm_default = default;
        self
    }

    /// Invoke the step's action. Called at most once per run.
    pub(crate) fn invoke(&mut self) -> Result<()> {
        (self.action)()
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("optional", &self.optional)
            .field("requires_confirmation", &self.requires_confirmation)
            .finish_non_exhaustive()
    }
}

/// Why a step was skipped instead of executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The operator declined the confirmation prompt.
    Declined,
    /// A prior mandatory step failed.
    PriorFailure,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Declined => "declined",
            Self::PriorFailure => "aborted by prior failure",
        };
        write!(f, "{}", s)
    }
}

/// Status of a step in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Step is waiting to run.
    Pending,
    /// Step was skipped; the action was never invoked.
    Skipped(SkipReason),
    /// Step completed successfully.
    Succeeded,
    /// Step failed.
    Failed,
}

impl StepState {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Get a display character for this state.
    pub fn display_char(&self) -> char {
        match self {
            Self::Pending => '○',
            Self::Skipped(_) => '⊘',
            Self::Succeeded => '✓',
            Self::Failed => '✗',
        }
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Skipped(reason) => write!(f, "skipped ({})", reason),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}
