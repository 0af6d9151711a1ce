//! Error types for talent-calc
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::{PathId, TalentId};

/// Result type alias for talent-calc operations
pub type TalentResult<T> = Result<T, TalentError>;

/// Main error type for talent-calc operations
#[derive(Error, Debug)]
pub enum TalentError {
    /// Select attempted with no remaining points
    #[error("no points left to spend ({spent}/{total} spent)")]
    BudgetExhausted { spent: u32, total: u32 },

    /// Select attempted while the previous talent in the chain is disabled
    #[error("talent {talent} in '{path}' requires talent {prev} to be selected first")]
    PrerequisiteNotMet {
        path: PathId,
        talent: TalentId,
        prev: TalentId,
    },

    /// Deselect attempted with zero points spent
    #[error("no points have been spent")]
    NoPointsSpent,

    /// Deselect attempted while the following talent in the chain is enabled
    #[error("talent {talent} in '{path}' cannot be removed while talent {post} is selected")]
    SuccessorStillActive {
        path: PathId,
        talent: TalentId,
        post: TalentId,
    },

    /// Path identifier not present in the tree
    #[error("unknown path '{path}'")]
    UnknownPath { path: PathId },

    /// Talent identifier not present in the given path
    #[error("unknown talent {talent} in path '{path}'")]
    UnknownTalent { path: PathId, talent: TalentId },

    /// Seed payload violates the tree invariants
    #[error("invalid talent tree seed: {reason}")]
    InvalidSeed { reason: String },

    /// Seed file could not be read
    #[error("failed to read seed {file}")]
    SeedRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file could not be parsed
    #[error("failed to parse seed {file}: {message}")]
    SeedParse { file: PathBuf, message: String },

    /// Command step string could not be parsed
    #[error("invalid step '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TalentError {
    /// True for the four chain/budget rule failures a user can trigger by
    /// clicking; false for input and setup errors.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            TalentError::BudgetExhausted { .. }
                | TalentError::PrerequisiteNotMet { .. }
                | TalentError::NoPointsSpent
                | TalentError::SuccessorStillActive { .. }
        )
    }

    /// Stable machine-readable name used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            TalentError::BudgetExhausted { .. } => "budget_exhausted",
            TalentError::PrerequisiteNotMet { .. } => "prerequisite_not_met",
            TalentError::NoPointsSpent => "no_points_spent",
            TalentError::SuccessorStillActive { .. } => "successor_still_active",
            TalentError::UnknownPath { .. } => "unknown_path",
            TalentError::UnknownTalent { .. } => "unknown_talent",
            TalentError::InvalidSeed { .. } => "invalid_seed",
            TalentError::SeedRead { .. } => "seed_read",
            TalentError::SeedParse { .. } => "seed_parse",
            TalentError::InvalidCommand { .. } => "invalid_command",
            TalentError::InvalidConfig { .. } => "invalid_config",
            TalentError::Io(_) => "io",
        }
    }
}
