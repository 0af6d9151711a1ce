//! Tree Event Port
//!
//! Observable interface for talent tree mutations.
//! Renderers repaint from it; the CLI turns it into an NDJSON stream.

use crate::domain::command::TalentCommand;
use crate::domain::tree::TalentTree;
use crate::error::TalentError;

/// Event emitted after each select/deselect attempt
#[derive(Debug)]
pub enum TreeEvent<'a> {
    /// The talent flag flipped and the budget moved
    Applied { command: &'a TalentCommand },

    /// The talent was already in the requested state
    Unchanged { command: &'a TalentCommand },

    /// A precondition failed; the tree is untouched
    Rejected {
        command: &'a TalentCommand,
        error: &'a TalentError,
    },
}

impl TreeEvent<'_> {
    pub fn command(&self) -> &TalentCommand {
        match self {
            TreeEvent::Applied { command }
            | TreeEvent::Unchanged { command }
            | TreeEvent::Rejected { command, .. } => command,
        }
    }
}

/// Trait for receiving tree events
///
/// `tree` is the state after the step has completed.
/// Implementations can be:
/// - Repaint flag for the interactive grid
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait TreeEventSink: Send + Sync {
    /// Handle a tree event
    fn on_event(&self, event: &TreeEvent<'_>, tree: &TalentTree);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl TreeEventSink for NoopEventSink {
    fn on_event(&self, _event: &TreeEvent<'_>, _tree: &TalentTree) {
        // Do nothing
    }
}
