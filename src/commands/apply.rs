use anyhow::Result;

use talent_calc::application::{ApplyReport, StepOutcome};
use talent_calc::{JsonEventSink, TalentCalculator, TalentCommand};

use crate::commands::setup::{load_session, GlobalArgs};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StateEvent};
use crate::ui::notice::Notice;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::talent_grid::render_grid;

/// Returns `false` when `strict` is set and a step was rejected.
pub fn cmd_apply(args: &GlobalArgs, steps: &[String], strict: bool) -> Result<bool> {
    // Parse every step before touching the tree.
    let commands = steps
        .iter()
        .map(|s| s.parse::<TalentCommand>())
        .collect::<Result<Vec<_>, _>>()?;

    let session = load_session(args)?;
    let ui = session.ui;
    let mut calculator = TalentCalculator::new(session.seed.into_tree()?);
    if ui.json {
        calculator.add_sink(Box::new(JsonEventSink::stdout()));
    }

    let report = calculator.apply_all(commands);

    if ui.json {
        emit_event(&StateEvent::new(calculator.tree()))?;
        emit_event(&CompleteEvent::from_report(&report))?;
    } else {
        print!("{}", render_report(&report, ui.color, ui.unicode));
        println!();
        let rendered = render_grid(calculator.tree(), None, None, ui.color, ui.unicode);
        for line in rendered.lines {
            println!("{line}");
        }
    }

    Ok(!strict || report.is_success())
}

fn render_report(report: &ApplyReport, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    for step in &report.steps {
        let icon = match step.outcome {
            StepOutcome::Applied => Icon::Success,
            StepOutcome::Unchanged => Icon::Pending,
            StepOutcome::Rejected(_) => Icon::Error,
        };
        out.push_str(&format!(
            "{} {} {}",
            icon.colored(supports_color, supports_unicode),
            step.command,
            step.outcome.label()
        ));
        if let StepOutcome::Rejected(err) = &step.outcome {
            out.push_str(&format!(": {}", Notice::from_error(err).message()));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "{} applied, {} unchanged, {} rejected\n",
        report.applied(),
        report.unchanged(),
        report.rejected()
    ));
    out
}
