//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TalentError, TalentResult};

use super::types::{ColorMode, Config};

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "talent-calc.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A relative `tree.seed` is resolved against the config file's directory.
pub fn load_with_warnings(path: &Path) -> TalentResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| TalentError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TalentError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(seed) = config.tree.seed.take() {
        let resolved = match path.parent() {
            Some(dir) if seed.is_relative() => dir.join(seed),
            _ => seed,
        };
        config.tree.seed = Some(resolved);
    }

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for w in &warnings {
        tracing::debug!(
            key = %w.key,
            file = %w.file.display(),
            suggestion = w.suggestion.as_deref().unwrap_or("-"),
            "unknown configuration key"
        );
    }

    Ok((config, warnings))
}

/// First config file that exists: project config, then user config
pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    project
        .into_iter()
        .chain(user_config_path())
        .find(|path| path.exists())
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let config = match discover(project_root) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring {}: {e}", path.display());
                Config::default()
            }
        },
        None => Config::default(),
    };

    with_env_overrides(config)
}

/// Apply environment variable overrides (TALENT_CALC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // TALENT_CALC_SEED
    if let Some(seed) = get_env("TALENT_CALC_SEED").filter(|s| !s.is_empty()) {
        config.tree.seed = Some(PathBuf::from(seed));
    }

    // TALENT_CALC_POINTS
    if let Some(points) = get_env("TALENT_CALC_POINTS") {
        match points.trim().parse::<u32>() {
            Ok(n) => config.tree.total_points = Some(n),
            Err(_) => tracing::warn!("ignoring TALENT_CALC_POINTS={points:?}: not a number"),
        }
    }

    // TALENT_CALC_COLOR
    if let Some(color) = get_env("TALENT_CALC_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // TALENT_CALC_UNICODE
    if let Some(val) = get_env("TALENT_CALC_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// `$XDG_CONFIG_HOME/talent-calc/config.toml`, or the platform config dir
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("talent-calc").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["tree", "seed", "total_points", "output", "color", "unicode"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
