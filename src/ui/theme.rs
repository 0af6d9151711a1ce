use crossterm::style::Color;

/// Design tokens for the talent-calc terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and connector bars must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "○";

    // Talent cell states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";

    // Connector between a talent and its prerequisite.
    pub const BAR_ON: &str = "━━━";
    pub const BAR_OFF: &str = "───";

    pub const CURSOR_LEFT: &str = ">";
    pub const CURSOR_RIGHT: &str = "<";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PENDING: &str = "[--]";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";

    pub const BAR_ON: &str = "===";
    pub const BAR_OFF: &str = "---";

    pub const CURSOR_LEFT: &str = ">";
    pub const CURSOR_RIGHT: &str = "<";
}
