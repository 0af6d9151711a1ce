//! Calculator result types

use crate::domain::command::TalentCommand;
use crate::domain::tree::Transition;
use crate::error::TalentError;

/// What happened to a single step
#[derive(Debug)]
pub enum StepOutcome {
    /// State changed
    Applied,
    /// Talent was already in the requested state
    Unchanged,
    /// A precondition failed; state untouched
    Rejected(TalentError),
}

impl StepOutcome {
    pub fn from_result(result: Result<Transition, TalentError>) -> Self {
        match result {
            Ok(Transition::Applied) => StepOutcome::Applied,
            Ok(Transition::Unchanged) => StepOutcome::Unchanged,
            Err(e) => StepOutcome::Rejected(e),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, StepOutcome::Rejected(_))
    }

    /// Short label used in text and JSON output
    pub fn label(&self) -> &'static str {
        match self {
            StepOutcome::Applied => "applied",
            StepOutcome::Unchanged => "unchanged",
            StepOutcome::Rejected(_) => "rejected",
        }
    }
}

/// A step paired with its outcome
#[derive(Debug)]
pub struct StepResult {
    pub command: TalentCommand,
    pub outcome: StepOutcome,
}

/// Result of applying a sequence of steps
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub steps: Vec<StepResult>,
}

impl ApplyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: TalentCommand, outcome: StepOutcome) {
        self.steps.push(StepResult { command, outcome });
    }

    pub fn applied(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Applied))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Unchanged))
    }

    pub fn rejected(&self) -> usize {
        self.count(StepOutcome::is_rejected)
    }

    /// Check if every step went through (applied or no-op)
    pub fn is_success(&self) -> bool {
        self.rejected() == 0
    }

    fn count(&self, pred: impl Fn(&StepOutcome) -> bool) -> usize {
        self.steps.iter().filter(|s| pred(&s.outcome)).count()
    }
}
