//! TalentCommand - one select or deselect step addressed by (path, talent)
//!
//! Textual form used by the `apply` command and the JSON event stream:
//!
//! ```text
//! select:path1:2     s:path1:2
//! deselect:path1:2   d:path1:2
//! ```

use std::str::FromStr;

use serde::Serialize;

use crate::domain::entities::{PathId, TalentId};
use crate::error::TalentError;

/// Which way a step moves a talent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Primary activation: spend a point
    Select,
    /// Secondary activation: reclaim a point
    Deselect,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Select => write!(f, "select"),
            Action::Deselect => write!(f, "deselect"),
        }
    }
}

/// A single step against the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentCommand {
    pub action: Action,
    pub path: PathId,
    pub talent: TalentId,
}

impl TalentCommand {
    pub fn select(path: impl Into<PathId>, talent: u32) -> Self {
        Self {
            action: Action::Select,
            path: path.into(),
            talent: TalentId(talent),
        }
    }

    pub fn deselect(path: impl Into<PathId>, talent: u32) -> Self {
        Self {
            action: Action::Deselect,
            path: path.into(),
            talent: TalentId(talent),
        }
    }
}

impl std::fmt::Display for TalentCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.action, self.path, self.talent)
    }
}

impl FromStr for TalentCommand {
    type Err = TalentError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TalentError::InvalidCommand {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = input.trim().splitn(3, ':');
        let (Some(action), Some(path), Some(talent)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected <action>:<path>:<talent>"));
        };

        let (action, path, talent) = (action.trim(), path.trim(), talent.trim());

        let action = match action.to_lowercase().as_str() {
            "select" | "s" => Action::Select,
            "deselect" | "d" => Action::Deselect,
            _ => return Err(invalid("action must be 'select' or 'deselect'")),
        };

        if path.is_empty() {
            return Err(invalid("path id is empty"));
        }

        let talent = talent
            .parse::<TalentId>()
            .map_err(|_| invalid("talent id must be a non-negative integer"))?;

        Ok(Self {
            action,
            path: PathId::from(path),
            talent,
        })
    }
}
