use anyhow::{bail, Result};

use talent_calc::{RepaintFlag, TalentCalculator};

use crate::commands::setup::{load_session, GlobalArgs};
use crate::ui::widgets::talent_grid::{render_grid, run_interactive};

pub fn cmd_interactive(args: &GlobalArgs) -> Result<()> {
    if args.json {
        bail!("--json is not supported by the interactive grid; use 'show' or 'apply'");
    }

    let session = load_session(args)?;
    let ui = session.ui;
    if !ui.caps.is_tty || !ui.caps.stdin_is_tty {
        bail!("the interactive grid needs a terminal; use 'talent-calc show' or 'talent-calc apply'");
    }

    let repaint = RepaintFlag::new();
    let mut calculator =
        TalentCalculator::new(session.seed.into_tree()?).with_sink(Box::new(repaint.clone()));

    run_interactive(
        &mut calculator,
        &repaint,
        ui.color,
        ui.unicode,
        ui.caps.supports_mouse,
    )?;

    // Leave the final loadout on the normal screen.
    let rendered = render_grid(calculator.tree(), None, None, ui.color, ui.unicode);
    for line in rendered.lines {
        println!("{line}");
    }
    Ok(())
}
