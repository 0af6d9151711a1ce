use anyhow::Result;

use talent_calc::TalentTree;

use crate::commands::setup::{load_session, GlobalArgs};
use crate::ui::json::{emit_event, events::CheckEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn cmd_check(args: &GlobalArgs) -> Result<()> {
    let session = load_session(args)?;
    let source = session.seed_source();
    let ui = session.ui;

    session.seed.validate()?;
    let summary = CheckEvent::new(&session.seed, &source);

    if ui.json {
        emit_event(&summary)?;
        return Ok(());
    }

    let tree = session.seed.into_tree()?;
    print!(
        "{}",
        render_check(&tree, &source, summary.talents, ui.color, ui.unicode)
    );
    Ok(())
}

fn render_check(
    tree: &TalentTree,
    source: &str,
    talent_count: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(format!("Seed OK: {source}"))
            .bold()
            .render(supports_color)
    );
    out.push_str(&format!(
        "  {} paths, {} talents, {} total points\n",
        tree.paths().len(),
        talent_count,
        tree.budget().total()
    ));

    let arrow = if supports_unicode { " → " } else { " -> " };
    for path in tree.paths() {
        let chain: Vec<String> = path
            .talents()
            .iter()
            .map(|t| format!("{} {}", t.id(), t.icon()))
            .collect();
        out.push_str(&format!(
            "  {} ({}): {}\n",
            path.id(),
            ColoredText::dim(path.name()).render(supports_color),
            chain.join(arrow)
        ));
    }
    out
}
