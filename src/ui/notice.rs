//! Fixed user-facing messages for rule violations.

use talent_calc::TalentError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const OUT_OF_POINTS: &str = "You are out of points to spend.";
pub const SELECT_PREVIOUS_FIRST: &str =
    "You must select the previous talent before choosing this one.";
pub const NOTHING_SPENT: &str = "You haven't spent any points yet.";
pub const DESELECT_FOLLOWING_FIRST: &str =
    "You must deselect the following talent before removing this one.";

/// The fixed message for one of the four rule violations.
pub fn rule_message(err: &TalentError) -> Option<&'static str> {
    match err {
        TalentError::BudgetExhausted { .. } => Some(OUT_OF_POINTS),
        TalentError::PrerequisiteNotMet { .. } => Some(SELECT_PREVIOUS_FIRST),
        TalentError::NoPointsSpent => Some(NOTHING_SPENT),
        TalentError::SuccessorStillActive { .. } => Some(DESELECT_FOLLOWING_FIRST),
        _ => None,
    }
}

/// A one-line, non-blocking message shown under the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
}

impl Notice {
    pub fn from_error(err: &TalentError) -> Self {
        let message = match rule_message(err) {
            Some(message) => message.to_string(),
            None => err.to_string(),
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(self.message.as_str()).render(supports_color)
        )
    }
}
