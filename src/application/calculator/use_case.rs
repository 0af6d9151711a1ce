//! TalentCalculator - the single writer in front of a `TalentTree`

use crate::domain::command::{Action, TalentCommand};
use crate::domain::ports::{TreeEvent, TreeEventSink};
use crate::domain::tree::{TalentTree, Transition};
use crate::error::TalentResult;

use super::result::{ApplyReport, StepOutcome};

/// Applies select/deselect steps to one tree and broadcasts each outcome.
pub struct TalentCalculator {
    tree: TalentTree,
    sinks: Vec<Box<dyn TreeEventSink>>,
}

impl TalentCalculator {
    /// Create a calculator with no sinks
    pub fn new(tree: TalentTree) -> Self {
        Self {
            tree,
            sinks: Vec::new(),
        }
    }

    /// Register a sink that sees every step after it completes
    pub fn with_sink(mut self, sink: Box<dyn TreeEventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn add_sink(&mut self, sink: Box<dyn TreeEventSink>) {
        self.sinks.push(sink);
    }

    /// Current state, read-only
    pub fn tree(&self) -> &TalentTree {
        &self.tree
    }

    /// Consume the calculator and hand back the tree
    pub fn into_tree(self) -> TalentTree {
        self.tree
    }

    /// Run one step to completion.
    pub fn apply(&mut self, command: &TalentCommand) -> TalentResult<Transition> {
        let result = match command.action {
            Action::Select => self.tree.select(&command.path, command.talent),
            Action::Deselect => self.tree.deselect(&command.path, command.talent),
        };

        let budget = self.tree.budget();
        match &result {
            Ok(Transition::Applied) => tracing::debug!(
                step = %command,
                spent = budget.spent(),
                total = budget.total(),
                "step applied"
            ),
            Ok(Transition::Unchanged) => tracing::debug!(step = %command, "step was a no-op"),
            Err(e) => tracing::debug!(step = %command, reason = e.kind(), "step rejected: {e}"),
        }

        let event = match &result {
            Ok(Transition::Applied) => TreeEvent::Applied { command },
            Ok(Transition::Unchanged) => TreeEvent::Unchanged { command },
            Err(error) => TreeEvent::Rejected { command, error },
        };
        for sink in &self.sinks {
            sink.on_event(&event, &self.tree);
        }

        result
    }

    /// Select a talent (primary activation)
    pub fn select(&mut self, path: &str, talent: u32) -> TalentResult<Transition> {
        self.apply(&TalentCommand::select(path, talent))
    }

    /// Deselect a talent (secondary activation)
    pub fn deselect(&mut self, path: &str, talent: u32) -> TalentResult<Transition> {
        self.apply(&TalentCommand::deselect(path, talent))
    }

    /// Apply steps in order, continuing past rejected ones.
    pub fn apply_all<I>(&mut self, commands: I) -> ApplyReport
    where
        I: IntoIterator<Item = TalentCommand>,
    {
        let mut report = ApplyReport::new();
        for command in commands {
            let outcome = StepOutcome::from_result(self.apply(&command));
            report.push(command, outcome);
        }
        tracing::info!(
            applied = report.applied(),
            unchanged = report.unchanged(),
            rejected = report.rejected(),
            "applied step sequence"
        );
        report
    }
}
