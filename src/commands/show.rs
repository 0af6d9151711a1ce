use anyhow::Result;

use crate::commands::setup::{load_session, GlobalArgs};
use crate::ui::json::{emit_event, events::StateEvent};
use crate::ui::widgets::talent_grid::render_grid;

pub fn cmd_show(args: &GlobalArgs) -> Result<()> {
    let session = load_session(args)?;
    let ui = session.ui;
    let tree = session.seed.into_tree()?;

    if ui.json {
        emit_event(&StateEvent::new(&tree))?;
        return Ok(());
    }

    let rendered = render_grid(&tree, None, None, ui.color, ui.unicode);
    for line in rendered.lines {
        println!("{line}");
    }
    Ok(())
}
