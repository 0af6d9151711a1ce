//! Talent tree seed payload
//!
//! The tree layout is data, not code: a `TreeSeed` is deserialized once
//! (TOML or JSON), validated, and turned into a [`TalentTree`] with every
//! talent disabled.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::TreeConfig;
use crate::domain::entities::{PathId, Talent, TalentId, TalentPath};
use crate::domain::tree::TalentTree;
use crate::error::{TalentError, TalentResult};

/// Seed format version understood by this build
pub const SEED_VERSION: u32 = 1;

const BUILTIN_SEED: &str = include_str!("../assets/default_tree.toml");

/// Static, designer-authored tree definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeSeed {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Point ceiling shared by all paths
    pub total_points: u32,

    pub paths: Vec<PathSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathSeed {
    pub id: String,
    pub name: String,
    /// Talents in chain order, first to last
    pub talents: Vec<TalentSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TalentSeed {
    pub id: u32,
    pub icon: String,

    /// Optional; derived from list order when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<u32>,

    /// Optional; derived from list order when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<u32>,
}

fn default_version() -> u32 {
    SEED_VERSION
}

/// Seed file encoding, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Toml,
    Json,
}

impl SeedFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SeedFormat::Json,
            _ => SeedFormat::Toml,
        }
    }
}

impl TreeSeed {
    /// The built-in two-path tree.
    pub fn builtin() -> TalentResult<Self> {
        Self::parse(BUILTIN_SEED, SeedFormat::Toml, Path::new("<builtin>"))
    }

    /// Parse a seed from a string in the given format.
    pub fn parse(content: &str, format: SeedFormat, origin: &Path) -> TalentResult<Self> {
        let parsed = match format {
            SeedFormat::Toml => toml::from_str::<TreeSeed>(content).map_err(|e| e.to_string()),
            SeedFormat::Json => {
                serde_json::from_str::<TreeSeed>(content).map_err(|e| e.to_string())
            }
        };
        parsed.map_err(|message| TalentError::SeedParse {
            file: origin.to_path_buf(),
            message,
        })
    }

    /// Load a seed file, picking the format from its extension.
    pub fn load(path: &Path) -> TalentResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| TalentError::SeedRead {
            file: path.to_path_buf(),
            source,
        })?;
        let seed = Self::parse(&content, SeedFormat::from_path(path), path)?;
        tracing::info!(
            seed = %path.display(),
            paths = seed.paths.len(),
            total_points = seed.total_points,
            "loaded talent tree seed"
        );
        Ok(seed)
    }

    /// Replace the point ceiling (config or CLI override).
    pub fn with_total_points(mut self, total_points: u32) -> Self {
        self.total_points = total_points;
        self
    }

    pub fn talent_count(&self) -> usize {
        self.paths.iter().map(|p| p.talents.len()).sum()
    }

    /// Check every tree invariant the model relies on.
    pub fn validate(&self) -> TalentResult<()> {
        let invalid =
            |reason: String| -> TalentResult<()> { Err(TalentError::InvalidSeed { reason }) };

        if self.version != SEED_VERSION {
            return invalid(format!(
                "unsupported seed version {} (expected {})",
                self.version, SEED_VERSION
            ));
        }
        if self.total_points == 0 {
            return invalid("total_points must be at least 1".to_string());
        }
        if self.paths.is_empty() {
            return invalid("at least one path is required".to_string());
        }

        let mut path_ids = HashSet::new();
        let mut talent_ids = HashSet::new();

        for path in &self.paths {
            if path.id.trim().is_empty() {
                return invalid("path id must not be empty".to_string());
            }
            if !path_ids.insert(path.id.as_str()) {
                return invalid(format!("duplicate path id '{}'", path.id));
            }
            if path.talents.is_empty() {
                return invalid(format!("path '{}' has no talents", path.id));
            }

            for (idx, talent) in path.talents.iter().enumerate() {
                if !talent_ids.insert(talent.id) {
                    return invalid(format!("duplicate talent id {}", talent.id));
                }

                let expected_prev = idx.checked_sub(1).map(|i| path.talents[i].id);
                let expected_post = path.talents.get(idx + 1).map(|t| t.id);

                if talent.prev.is_some() && talent.prev != expected_prev {
                    return invalid(format!(
                        "talent {} in '{}' declares prev {} but the chain gives {}",
                        talent.id,
                        path.id,
                        display_link(talent.prev),
                        display_link(expected_prev)
                    ));
                }
                if talent.post.is_some() && talent.post != expected_post {
                    return invalid(format!(
                        "talent {} in '{}' declares post {} but the chain gives {}",
                        talent.id,
                        path.id,
                        display_link(talent.post),
                        display_link(expected_post)
                    ));
                }
            }
        }

        Ok(())
    }

    /// Validate and build the live tree with every talent disabled.
    pub fn into_tree(self) -> TalentResult<TalentTree> {
        self.validate()?;

        let paths = self
            .paths
            .into_iter()
            .map(|path| {
                let ids: Vec<u32> = path.talents.iter().map(|t| t.id).collect();
                let talents = path
                    .talents
                    .into_iter()
                    .enumerate()
                    .map(|(idx, t)| {
                        let prev = idx.checked_sub(1).map(|i| TalentId(ids[i]));
                        let post = ids.get(idx + 1).copied().map(TalentId);
                        Talent::new(TalentId(t.id), t.icon, prev, post)
                    })
                    .collect();
                TalentPath::new(PathId::new(path.id), path.name, talents)
            })
            .collect();

        Ok(TalentTree::new(paths, self.total_points))
    }
}

/// Pick the seed named by configuration (or the built-in tree) and apply
/// the configured point override.
pub fn resolve(config: &TreeConfig) -> TalentResult<TreeSeed> {
    let seed = match &config.seed {
        Some(path) => TreeSeed::load(path)?,
        None => TreeSeed::builtin()?,
    };
    Ok(match config.total_points {
        Some(total) => seed.with_total_points(total),
        None => seed,
    })
}

fn display_link(link: Option<u32>) -> String {
    match link {
        Some(id) => id.to_string(),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn origin() -> PathBuf {
        PathBuf::from("tree.toml")
    }

    fn two_talent_seed(extra: &str) -> String {
        format!(
            r#"
total_points = 3

[[paths]]
id = "a"
name = "A"
talents = [
  {{ id = 1, icon = "x" {extra} }},
  {{ id = 2, icon = "y" }},
]
"#
        )
    }

    #[test]
    fn builtin_seed_matches_reference_tree() {
        let seed = TreeSeed::builtin().unwrap();
        assert_eq!(seed.total_points, 6);
        assert_eq!(seed.paths.len(), 2);
        assert_eq!(seed.talent_count(), 8);
        assert_eq!(seed.paths[1].talents[0].icon, "boatmaybeidk");
        seed.validate().unwrap();
    }

    #[test]
    fn into_tree_derives_chain_links() {
        let tree = TreeSeed::builtin().unwrap().into_tree().unwrap();
        let path1 = tree.path(&PathId::from("path1")).unwrap();

        let first = path1.talent(TalentId(1)).unwrap();
        assert_eq!(first.prev(), None);
        assert_eq!(first.post(), Some(TalentId(2)));

        let last = path1.talent(TalentId(4)).unwrap();
        assert_eq!(last.prev(), Some(TalentId(3)));
        assert_eq!(last.post(), None);

        assert_eq!(tree.budget().spent(), 0);
        assert_eq!(tree.enabled_count(), 0);
    }

    #[test]
    fn explicit_links_must_agree_with_order() {
        let ok = TreeSeed::parse(&two_talent_seed(", post = 2"), SeedFormat::Toml, &origin())
            .unwrap();
        ok.validate().unwrap();

        let bad = TreeSeed::parse(&two_talent_seed(", prev = 2"), SeedFormat::Toml, &origin())
            .unwrap();
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("declares prev 2"), "{err}");
    }

    #[test]
    fn rejects_duplicate_talent_ids_across_paths() {
        let mut seed = TreeSeed::builtin().unwrap();
        seed.paths[1].talents[0].id = 1;
        let err = seed.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate talent id 1"), "{err}");
    }

    #[test]
    fn rejects_duplicate_path_ids() {
        let mut seed = TreeSeed::builtin().unwrap();
        seed.paths[1].id = "path1".to_string();
        assert!(seed.validate().is_err());
    }

    #[test]
    fn rejects_zero_budget_and_empty_paths() {
        assert!(TreeSeed::builtin().unwrap().with_total_points(0).validate().is_err());

        let mut seed = TreeSeed::builtin().unwrap();
        seed.paths[0].talents.clear();
        let err = seed.validate().unwrap_err();
        assert!(err.to_string().contains("has no talents"), "{err}");

        let mut seed = TreeSeed::builtin().unwrap();
        seed.paths.clear();
        assert!(seed.validate().is_err());
    }

    #[test]
    fn rejects_unknown_version() {
        let mut seed = TreeSeed::builtin().unwrap();
        seed.version = 2;
        assert!(matches!(
            seed.validate(),
            Err(TalentError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn parses_json_seed() {
        let json = r#"{
            "total_points": 2,
            "paths": [
                { "id": "p", "name": "P", "talents": [ { "id": 10, "icon": "a" }, { "id": 11, "icon": "b", "prev": 10 } ] }
            ]
        }"#;
        let seed = TreeSeed::parse(json, SeedFormat::Json, Path::new("t.json")).unwrap();
        assert_eq!(seed.version, SEED_VERSION);
        let tree = seed.into_tree().unwrap();
        assert_eq!(tree.budget().total(), 2);
    }

    #[test]
    fn unknown_fields_are_parse_errors() {
        let err = TreeSeed::parse(
            "total_points = 1\ncolour = 3\npaths = []",
            SeedFormat::Toml,
            &origin(),
        )
        .unwrap_err();
        assert!(matches!(err, TalentError::SeedParse { .. }));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(SeedFormat::from_path(Path::new("t.JSON")), SeedFormat::Json);
        assert_eq!(SeedFormat::from_path(Path::new("t.toml")), SeedFormat::Toml);
        assert_eq!(SeedFormat::from_path(Path::new("tree")), SeedFormat::Toml);
    }

    #[test]
    fn resolve_applies_point_override() {
        let config = TreeConfig {
            seed: None,
            total_points: Some(9),
        };
        let seed = resolve(&config).unwrap();
        assert_eq!(seed.total_points, 9);
        assert_eq!(seed.paths.len(), 2);
    }

    #[test]
    fn resolve_reports_missing_seed_file() {
        let config = TreeConfig {
            seed: Some(PathBuf::from("/nonexistent/talent/tree.toml")),
            total_points: None,
        };
        assert!(matches!(resolve(&config), Err(TalentError::SeedRead { .. })));
    }

    #[test]
    fn load_error_names_the_missing_file() {
        let err = TreeSeed::load(Path::new("/nonexistent/my_tree.toml")).unwrap_err();
        assert!(err.to_string().contains("my_tree.toml"), "{err}");
        assert_eq!(err.kind(), "seed_read");
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tree.toml");
        fs::write(&file, two_talent_seed("")).unwrap();

        let seed = TreeSeed::load(&file).unwrap();
        assert_eq!(seed.total_points, 3);
        assert_eq!(seed.paths[0].talents.len(), 2);
    }
}
