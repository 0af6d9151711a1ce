//! talent-calc CLI - talent tree calculator
//!
//! Usage: talent-calc [COMMAND]
//!
//! Commands:
//!   interactive  Full-screen talent grid (default)
//!   show         Print the grid for a fresh tree
//!   apply        Apply select/deselect steps
//!   check        Validate the tree seed

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};
use commands::setup::GlobalArgs;
use talent_calc::Config;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let (json, color) = (cli.json, cli.color);
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // Config files may be what failed; errors use flags and env only.
            let error_ui = UiContext::new(json, color, &Config::default().with_env_overrides());
            ui::error::print_error(&e, &error_ui);
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` means the command ran but reported failure (`apply --strict`).
fn run(cli: Cli) -> Result<bool> {
    let args = GlobalArgs::from(&cli);

    match cli.command {
        None | Some(Commands::Interactive) => commands::interactive::cmd_interactive(&args)?,
        Some(Commands::Show) => commands::show::cmd_show(&args)?,
        Some(Commands::Apply { steps, strict }) => {
            return commands::apply::cmd_apply(&args, &steps, strict)
        }
        Some(Commands::Check) => commands::check::cmd_check(&args)?,
    }

    Ok(true)
}
