//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --seed, --points) are inherited
//! by all subcommands. With no subcommand the interactive grid starts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// talent-calc - talent tree calculator
#[derive(Parser, Debug)]
#[command(name = "talent-calc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'talent-calc' without arguments for the interactive grid.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Tree seed file (TOML, or JSON with a .json extension)
    #[arg(long, global = true, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Override the seed's total points
    #[arg(long, global = true, value_name = "N")]
    pub points: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full-screen talent grid (default)
    Interactive,

    /// Print the grid for a fresh tree
    Show,

    /// Apply select/deselect steps in order and print the result
    #[command(after_help = "Steps: select:<path>:<talent>, deselect:<path>:<talent> (or s:/d:)")]
    Apply {
        /// Steps such as select:path1:1 or d:path1:1
        #[arg(required = true, value_name = "STEP")]
        steps: Vec<String>,

        /// Exit with status 1 if any step is rejected
        #[arg(long)]
        strict: bool,
    },

    /// Validate the tree seed and print a summary
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["talent-calc"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parse_apply() {
        let cli = Cli::try_parse_from([
            "talent-calc",
            "apply",
            "select:path1:1",
            "d:path1:1",
            "--strict",
        ])
        .unwrap();
        if let Some(Commands::Apply { steps, strict }) = cli.command {
            assert_eq!(steps, vec!["select:path1:1", "d:path1:1"]);
            assert!(strict);
        } else {
            panic!("Expected Apply command");
        }
    }

    #[test]
    fn test_cli_apply_requires_steps() {
        assert!(Cli::try_parse_from(["talent-calc", "apply"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "talent-calc",
            "show",
            "--seed",
            "tree.json",
            "--points",
            "3",
            "-vv",
            "--json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Show)));
        assert_eq!(cli.seed, Some(PathBuf::from("tree.json")));
        assert_eq!(cli.points, Some(3));
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["talent-calc", "--color", "never", "check"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
        assert!(matches!(cli.command, Some(Commands::Check)));
    }
}
