use talent_calc::TalentError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    format_error_with(err, ui.color, ui.unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("Error: {err}"))
            .bold()
            .render(supports_color)
    );

    // Context layers added by anyhow, innermost last.
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {cause}\n"));
    }

    if let Some(fix) = err.downcast_ref::<TalentError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::info("FIX:").render(supports_color),
            fix
        ));
    }

    out
}

fn fix_hint(err: &TalentError) -> Option<String> {
    match err {
        TalentError::SeedRead { file, .. } => Some(format!(
            "Check that {} exists, or unset --seed / TALENT_CALC_SEED to use the built-in tree.",
            file.display()
        )),
        TalentError::SeedParse { .. } => Some(
            "Check the seed file syntax (TOML by default, JSON when the file ends in .json)."
                .to_string(),
        ),
        TalentError::InvalidSeed { .. } => Some(
            "Each path must be a linear chain: unique ids, prev/post matching list order."
                .to_string(),
        ),
        TalentError::InvalidCommand { .. } => {
            Some("Steps look like select:<path>:<talent> or d:<path>:<talent>.".to_string())
        }
        TalentError::InvalidConfig { file, .. } => {
            Some(format!("Fix or remove {}.", file.display()))
        }
        TalentError::UnknownPath { .. } | TalentError::UnknownTalent { .. } => {
            Some("Run `talent-calc check` to list the paths and talents.".to_string())
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit_event(&crate::ui::json::events::ErrorEvent::new(err));
        return;
    }

    eprint!("{}", format_error(err, ui));
}
