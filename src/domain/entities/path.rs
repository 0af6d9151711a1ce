//! TalentPath entity - one independent chain of talents

use serde::{Deserialize, Serialize};

use super::talent::{Talent, TalentId};

/// Path identifier (e.g. `path1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(String);

impl PathId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PathId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for PathId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named chain of talents, stored in chain (and display) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentPath {
    id: PathId,
    name: String,
    talents: Vec<Talent>,
}

impl TalentPath {
    pub fn new(id: PathId, name: impl Into<String>, talents: Vec<Talent>) -> Self {
        Self {
            id,
            name: name.into(),
            talents,
        }
    }

    pub fn id(&self) -> &PathId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn talents(&self) -> &[Talent] {
        &self.talents
    }

    pub fn talent(&self, id: TalentId) -> Option<&Talent> {
        self.talents.iter().find(|t| t.id() == id)
    }

    pub(crate) fn talent_mut(&mut self, id: TalentId) -> Option<&mut Talent> {
        self.talents.iter_mut().find(|t| t.id() == id)
    }

    /// Whether the given talent exists and is enabled
    pub fn is_enabled(&self, id: TalentId) -> bool {
        self.talent(id).is_some_and(Talent::is_enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.talents.iter().filter(|t| t.is_enabled()).count()
    }
}
