//! Shared startup: config layering, seed resolution, UI context.

use std::path::PathBuf;

use anyhow::Result;

use talent_calc::config::{self, Config};
use talent_calc::seed;
use talent_calc::TreeSeed;

use crate::cli::{Cli, ColorWhen};
use crate::commands::project_root::discover_project_root;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Global flags every command shares
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub seed: Option<PathBuf>,
    pub points: Option<u32>,
}

impl From<&Cli> for GlobalArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            color: cli.color,
            seed: cli.seed.clone(),
            points: cli.points,
        }
    }
}

/// Everything a command needs to run
pub struct Session {
    pub config: Config,
    pub seed: TreeSeed,
    pub ui: UiContext,
}

impl Session {
    /// Where the seed came from, for summaries.
    pub fn seed_source(&self) -> String {
        match &self.config.tree.seed {
            Some(path) => path.display().to_string(),
            None => "<builtin>".to_string(),
        }
    }
}

pub fn load_session(args: &GlobalArgs) -> Result<Session> {
    let cwd = std::env::current_dir()?;
    let project_root = discover_project_root(&cwd);

    let (config, warnings) = match config::discover(Some(&project_root)) {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(&path)?;
            (config, Some((path, warnings)))
        }
        None => (Config::default(), None),
    };
    let config = apply_cli_overrides(config.with_env_overrides(), args);

    let ui = UiContext::new(args.json, args.color, &config);
    if let Some((path, warnings)) = warnings {
        if !args.json && !warnings.is_empty() {
            print_config_warnings(&path, &warnings, ui.unicode);
        }
    }

    let seed = seed::resolve(&config.tree)?;
    Ok(Session { config, seed, ui })
}

fn apply_cli_overrides(mut config: Config, args: &GlobalArgs) -> Config {
    if let Some(seed) = &args.seed {
        config.tree.seed = Some(seed.clone());
    }
    if let Some(points) = args.points {
        config.tree.total_points = Some(points);
    }
    config
}
