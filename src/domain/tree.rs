//! TalentTree - the talent/path graph plus the point budget
//!
//! All mutation goes through [`TalentTree::select`] and
//! [`TalentTree::deselect`]. Each call validates its preconditions in a fixed
//! order and either applies exactly one flag flip (and one budget step) or
//! leaves the tree untouched.

use serde::Serialize;

use crate::domain::entities::{Budget, PathId, Talent, TalentId, TalentPath};
use crate::error::{TalentError, TalentResult};

/// Outcome of a successful select/deselect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// The talent flag flipped and the budget moved by one point
    Applied,
    /// The talent was already in the requested state
    Unchanged,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// The whole talent tree: every path and the shared budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentTree {
    paths: Vec<TalentPath>,
    budget: Budget,
}

impl TalentTree {
    /// Assemble a tree from already-validated paths.
    ///
    /// Chain validation lives in [`crate::seed::TreeSeed`]; every talent is
    /// expected to be disabled here.
    pub(crate) fn new(paths: Vec<TalentPath>, total_points: u32) -> Self {
        Self {
            paths,
            budget: Budget::new(total_points),
        }
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn paths(&self) -> &[TalentPath] {
        &self.paths
    }

    pub fn path(&self, id: &PathId) -> Option<&TalentPath> {
        self.paths.iter().find(|p| p.id() == id)
    }

    pub fn talent(&self, path: &PathId, talent: TalentId) -> Option<&Talent> {
        self.path(path).and_then(|p| p.talent(talent))
    }

    pub fn is_enabled(&self, path: &PathId, talent: TalentId) -> bool {
        self.talent(path, talent).is_some_and(Talent::is_enabled)
    }

    /// Number of enabled talents across all paths
    pub fn enabled_count(&self) -> usize {
        self.paths.iter().map(TalentPath::enabled_count).sum()
    }

    /// Enabled talents in display order, paired with their path
    pub fn enabled_talents(&self) -> Vec<(&PathId, &Talent)> {
        self.paths
            .iter()
            .flat_map(|p| {
                p.talents()
                    .iter()
                    .filter(|t| t.is_enabled())
                    .map(move |t| (p.id(), t))
            })
            .collect()
    }

    /// Enable a talent, spending one point.
    ///
    /// Checks, in order: the budget has room, the talent is not already
    /// enabled (no-op otherwise), and its `prev` talent is enabled.
    pub fn select(&mut self, path_id: &PathId, talent_id: TalentId) -> TalentResult<Transition> {
        let talent = self.lookup(path_id, talent_id)?;
        let prev = talent.prev();
        let already_enabled = talent.is_enabled();

        if self.budget.is_exhausted() {
            return Err(TalentError::BudgetExhausted {
                spent: self.budget.spent(),
                total: self.budget.total(),
            });
        }

        if already_enabled {
            return Ok(Transition::Unchanged);
        }

        if let Some(prev) = prev {
            if !self.is_enabled(path_id, prev) {
                return Err(TalentError::PrerequisiteNotMet {
                    path: path_id.clone(),
                    talent: talent_id,
                    prev,
                });
            }
        }

        self.set_enabled(path_id, talent_id, true);
        self.budget.spend();
        Ok(Transition::Applied)
    }

    /// Disable a talent, refunding one point.
    ///
    /// Checks, in order: at least one point is spent, the talent is not
    /// already disabled (no-op otherwise), and its `post` talent is disabled.
    pub fn deselect(&mut self, path_id: &PathId, talent_id: TalentId) -> TalentResult<Transition> {
        let talent = self.lookup(path_id, talent_id)?;
        let post = talent.post();
        let already_disabled = !talent.is_enabled();

        if self.budget.spent() == 0 {
            return Err(TalentError::NoPointsSpent);
        }

        if already_disabled {
            return Ok(Transition::Unchanged);
        }

        if let Some(post) = post {
            if self.is_enabled(path_id, post) {
                return Err(TalentError::SuccessorStillActive {
                    path: path_id.clone(),
                    talent: talent_id,
                    post,
                });
            }
        }

        self.set_enabled(path_id, talent_id, false);
        self.budget.refund();
        Ok(Transition::Applied)
    }

    fn lookup(&self, path_id: &PathId, talent_id: TalentId) -> TalentResult<&Talent> {
        let path = self.path(path_id).ok_or_else(|| TalentError::UnknownPath {
            path: path_id.clone(),
        })?;
        path.talent(talent_id)
            .ok_or_else(|| TalentError::UnknownTalent {
                path: path_id.clone(),
                talent: talent_id,
            })
    }

    fn set_enabled(&mut self, path_id: &PathId, talent_id: TalentId, enabled: bool) {
        if let Some(talent) = self
            .paths
            .iter_mut()
            .find(|p| p.id() == path_id)
            .and_then(|p| p.talent_mut(talent_id))
        {
            talent.set_enabled(enabled);
        }
    }
}
