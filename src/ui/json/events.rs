//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use talent_calc::{ApplyReport, TalentError, TalentTree, TreeSeed};

/// Snapshot of the whole tree.
#[derive(Debug, Clone, Serialize)]
pub struct StateEvent<'a> {
    pub event: &'static str,
    pub spent: u32,
    pub total: u32,
    pub remaining: u32,
    pub paths: Vec<PathState<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathState<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub talents: Vec<TalentState<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TalentState<'a> {
    pub id: u32,
    pub icon: &'a str,
    pub enabled: bool,
}

impl<'a> StateEvent<'a> {
    pub fn new(tree: &'a TalentTree) -> Self {
        let budget = tree.budget();
        let paths = tree
            .paths()
            .iter()
            .map(|p| PathState {
                id: p.id().as_str(),
                name: p.name(),
                talents: p
                    .talents()
                    .iter()
                    .map(|t| TalentState {
                        id: t.id().0,
                        icon: t.icon(),
                        enabled: t.is_enabled(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            event: "state",
            spent: budget.spent(),
            total: budget.total(),
            remaining: budget.remaining(),
            paths,
        }
    }
}

/// Result of validating a seed.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub valid: bool,
    pub source: &'a str,
    pub paths: usize,
    pub talents: usize,
    pub total_points: u32,
}

impl<'a> CheckEvent<'a> {
    pub fn new(seed: &TreeSeed, source: &'a str) -> Self {
        Self {
            event: "check",
            valid: true,
            source,
            paths: seed.paths.len(),
            talents: seed.talent_count(),
            total_points: seed.total_points,
        }
    }
}

/// Totals for an `apply` run.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub success: bool,
    pub applied: usize,
    pub unchanged: usize,
    pub rejected: usize,
}

impl CompleteEvent {
    pub fn from_report(report: &ApplyReport) -> Self {
        Self {
            event: "complete",
            command: "apply",
            success: report.is_success(),
            applied: report.applied(),
            unchanged: report.unchanged(),
            rejected: report.rejected(),
        }
    }
}

/// A fatal error, printed instead of the text block in `--json` mode.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(err: &anyhow::Error) -> Self {
        Self {
            event: "error",
            kind: err.downcast_ref::<TalentError>().map(TalentError::kind),
            message: err.to_string(),
        }
    }
}
