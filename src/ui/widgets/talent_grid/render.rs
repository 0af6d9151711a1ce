//! Terminal rendering for the talent grid.
//!
//! Rendering is pure: it turns a tree snapshot into lines plus a layout that
//! maps screen cells back to talents for mouse hit-testing.

use unicode_width::UnicodeWidthStr;

use talent_calc::{PathId, Talent, TalentId, TalentPath, TalentTree};

use crate::ui::notice::Notice;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};
use crate::ui::theme::{icons, icons_ascii};

pub const TITLE: &str = "TitanStar Legends - Rune Mastery Loadout Talent Calculator 3000";

/// Screen row of the first path; paths are separated by one blank line.
const FIRST_PATH_ROW: usize = 4;

/// Gap between the path name column and the first talent cell
const NAME_GAP: usize = 2;

/// Screen region occupied by one talent cell
#[derive(Debug, Clone, PartialEq, Eq)]
struct CellRegion {
    row: u16,
    /// First column of the cell
    start: u16,
    /// One past the last column
    end: u16,
    path: PathId,
    talent: TalentId,
}

/// Maps terminal coordinates back to talent cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    cells: Vec<CellRegion>,
}

impl GridLayout {
    /// The talent drawn at (`column`, `row`), if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<(&PathId, TalentId)> {
        self.cells
            .iter()
            .find(|c| c.row == row && (c.start..c.end).contains(&column))
            .map(|c| (&c.path, c.talent))
    }
}

/// Rendered lines plus their hit-test layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGrid {
    pub lines: Vec<String>,
    pub layout: GridLayout,
}

/// Render the tree.
///
/// `cursor` is (path index, talent index); `None` draws no cursor, as in
/// the non-interactive commands.
pub fn render_grid(
    tree: &TalentTree,
    cursor: Option<(usize, usize)>,
    notice: Option<&Notice>,
    supports_color: bool,
    supports_unicode: bool,
) -> RenderedGrid {
    let budget = tree.budget();
    let mut lines = vec![
        ColoredText::plain(TITLE).bold().render(supports_color),
        String::new(),
        ColoredText::info(format!(
            "{} / {} Points Spent",
            budget.spent(),
            budget.total()
        ))
        .render(supports_color),
        String::new(),
    ];
    let mut layout = GridLayout::default();

    let name_width = tree
        .paths()
        .iter()
        .map(|p| p.name().width())
        .max()
        .unwrap_or(0);

    for (row_idx, path) in tree.paths().iter().enumerate() {
        if row_idx > 0 {
            lines.push(String::new());
        }
        let screen_row = FIRST_PATH_ROW + 2 * row_idx;
        let cursor_col = cursor.and_then(|(r, c)| (r == row_idx).then_some(c));
        let line = render_path_row(
            path,
            name_width,
            cursor_col,
            screen_row as u16,
            &mut layout,
            supports_color,
            supports_unicode,
        );
        lines.push(line);
    }

    if let Some(notice) = notice {
        lines.push(String::new());
        lines.push(notice.render(supports_color, supports_unicode));
    }

    RenderedGrid { lines, layout }
}

fn render_path_row(
    path: &TalentPath,
    name_width: usize,
    cursor_col: Option<usize>,
    screen_row: u16,
    layout: &mut GridLayout,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let name = path.name();
    let pad = name_width.saturating_sub(name.width()) + NAME_GAP;
    let mut line = format!("{}{}", name, " ".repeat(pad));
    let mut column = name_width + NAME_GAP;

    for (idx, talent) in path.talents().iter().enumerate() {
        if let Some(prev) = talent.prev() {
            let bar = render_bar(path.is_enabled(prev), supports_unicode);
            column += bar.width();
            line.push_str(&bar.render(supports_color));
        }

        let cell = render_cell(talent, cursor_col == Some(idx), supports_unicode);
        let width = cell.iter().map(ColoredText::width).sum::<usize>();
        layout.cells.push(CellRegion {
            row: screen_row,
            start: column as u16,
            end: (column + width) as u16,
            path: path.id().clone(),
            talent: talent.id(),
        });
        column += width;
        for part in &cell {
            line.push_str(&part.render(supports_color));
        }
    }

    line.trim_end().to_string()
}

/// Connector drawn before a talent; "on" when its prerequisite is enabled
fn render_bar(on: bool, supports_unicode: bool) -> ColoredText {
    let (glyph, color) = match (on, supports_unicode) {
        (true, true) => (icons::BAR_ON, SemanticColor::Success),
        (false, true) => (icons::BAR_OFF, SemanticColor::Dim),
        (true, false) => (icons_ascii::BAR_ON, SemanticColor::Success),
        (false, false) => (icons_ascii::BAR_OFF, SemanticColor::Dim),
    };
    ColoredText::colored(glyph, color)
}

/// `<marker><state> <icon><marker>`
fn render_cell(talent: &Talent, is_cursor: bool, supports_unicode: bool) -> [ColoredText; 3] {
    let (left, right) = match (is_cursor, supports_unicode) {
        (false, _) => (" ", " "),
        (true, true) => (icons::CURSOR_LEFT, icons::CURSOR_RIGHT),
        (true, false) => (icons_ascii::CURSOR_LEFT, icons_ascii::CURSOR_RIGHT),
    };

    let state = if talent.is_enabled() {
        Icon::Selected
    } else {
        Icon::Unselected
    };
    let body = format!("{} {}", state.render(supports_unicode), talent.icon());
    let body = ColoredText::colored(body, state.semantic_color());
    let body = if is_cursor { body.bold() } else { body };

    [
        ColoredText::info(left),
        body,
        ColoredText::info(right),
    ]
}

/// Key help shown under the grid in interactive mode.
pub fn render_help_bar(supports_unicode: bool) -> String {
    let arrows = if supports_unicode { "←↑↓→" } else { "arrows" };
    format!(
        "{arrows}/hjkl move  Enter/Space select  Backspace/x deselect  click select  right-click deselect  q quit"
    )
}
