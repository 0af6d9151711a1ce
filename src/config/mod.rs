//! Configuration module for talent-calc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TALENT_CALC_*)
//! 3. Project config (./talent-calc.toml)
//! 4. User config (~/.config/talent-calc/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover, user_config_path, with_env_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, OutputConfig, TreeConfig};
