//! Talent entity - a single selectable node in a path

use serde::{Deserialize, Serialize};

/// Talent identifier, unique across the whole tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TalentId(pub u32);

impl std::fmt::Display for TalentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TalentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(TalentId)
    }
}

/// A selectable node in a talent path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Talent {
    id: TalentId,
    /// Opaque display tag
    icon: String,
    enabled: bool,
    /// Talent that must be enabled before this one
    prev: Option<TalentId>,
    /// Talent that must be disabled before this one can be removed
    post: Option<TalentId>,
}

impl Talent {
    /// Create a disabled talent with the given chain links
    pub fn new(
        id: TalentId,
        icon: impl Into<String>,
        prev: Option<TalentId>,
        post: Option<TalentId>,
    ) -> Self {
        Self {
            id,
            icon: icon.into(),
            enabled: false,
            prev,
            post,
        }
    }

    pub fn id(&self) -> TalentId {
        self.id
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn prev(&self) -> Option<TalentId> {
        self.prev
    }

    pub fn post(&self) -> Option<TalentId> {
        self.post
    }

    /// Only the tree flips this flag, after validating the chain and budget.
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
