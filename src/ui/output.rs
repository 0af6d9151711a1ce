use std::path::Path;

use talent_calc::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], supports_unicode: bool) {
    eprint!("{}", format_config_warnings(path, warnings, supports_unicode));
}

fn format_config_warnings(path: &Path, warnings: &[ConfigWarning], supports_unicode: bool) -> String {
    let icon = Icon::Warning.render(supports_unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{icon} Unknown config key '{}' in {}:{}\n",
                w.key,
                path.display(),
                line
            )),
            None => out.push_str(&format!(
                "{icon} Unknown config key '{}' in {}\n",
                w.key,
                path.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n\n", suggestion));
        }
    }
    out
}
