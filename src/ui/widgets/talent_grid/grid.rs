//! TalentGrid state management and action handling.

use talent_calc::{PathId, TalentCalculator, TalentCommand, TalentId, TalentTree};

use crate::ui::notice::Notice;

/// Talent grid action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    /// Move cursor to the previous path
    Up,
    /// Move cursor to the next path
    Down,
    /// Move cursor toward the start of the chain
    Left,
    /// Move cursor toward the end of the chain
    Right,
    /// Primary-activate the cell under the cursor
    Select,
    /// Secondary-activate the cell under the cursor
    Deselect,
    /// Primary-activate a specific cell (mouse)
    SelectAt(PathId, TalentId),
    /// Secondary-activate a specific cell (mouse)
    DeselectAt(PathId, TalentId),
    /// Leave the calculator
    Quit,
}

/// What the interactive loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridResponse {
    /// Cursor moved; redraw
    Moved,
    /// A select/deselect ran; sinks decide about the redraw
    Activated,
    /// Nothing to do
    Ignored,
    Quit,
}

/// Cursor and notice state for the interactive grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalentGrid {
    /// (path index, talent index)
    cursor: (usize, usize),
    notice: Option<Notice>,
}

impl TalentGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Handle an action, running select/deselect through the calculator.
    pub fn handle_action(
        &mut self,
        action: GridAction,
        calculator: &mut TalentCalculator,
    ) -> GridResponse {
        let tree = calculator.tree();
        match action {
            GridAction::Up => self.move_row(tree, -1),
            GridAction::Down => self.move_row(tree, 1),
            GridAction::Left => self.move_col(tree, -1),
            GridAction::Right => self.move_col(tree, 1),
            GridAction::Select => {
                match self.cursor_command(tree, |p, t| TalentCommand::select(p, t)) {
                    Some(command) => self.activate(calculator, command),
                    None => GridResponse::Ignored,
                }
            }
            GridAction::Deselect => {
                match self.cursor_command(tree, |p, t| TalentCommand::deselect(p, t)) {
                    Some(command) => self.activate(calculator, command),
                    None => GridResponse::Ignored,
                }
            }
            GridAction::SelectAt(path, talent) => {
                self.focus(tree, &path, talent);
                self.activate(calculator, TalentCommand::select(path, talent.0))
            }
            GridAction::DeselectAt(path, talent) => {
                self.focus(tree, &path, talent);
                self.activate(calculator, TalentCommand::deselect(path, talent.0))
            }
            GridAction::Quit => GridResponse::Quit,
        }
    }

    fn activate(&mut self, calculator: &mut TalentCalculator, command: TalentCommand) -> GridResponse {
        match calculator.apply(&command) {
            Ok(_) => self.notice = None,
            Err(e) => self.notice = Some(Notice::from_error(&e)),
        }
        GridResponse::Activated
    }

    fn cursor_command(
        &self,
        tree: &TalentTree,
        make: fn(PathId, u32) -> TalentCommand,
    ) -> Option<TalentCommand> {
        let (row, col) = self.cursor;
        let path = tree.paths().get(row)?;
        let talent = path.talents().get(col)?;
        Some(make(path.id().clone(), talent.id().0))
    }

    fn focus(&mut self, tree: &TalentTree, path: &PathId, talent: TalentId) {
        let found = tree.paths().iter().enumerate().find_map(|(row, p)| {
            if p.id() != path {
                return None;
            }
            p.talents()
                .iter()
                .position(|t| t.id() == talent)
                .map(|col| (row, col))
        });
        if let Some(cursor) = found {
            self.cursor = cursor;
        }
    }

    fn move_row(&mut self, tree: &TalentTree, delta: isize) -> GridResponse {
        let rows = tree.paths().len();
        let Some(row) = step(self.cursor.0, delta, rows) else {
            return GridResponse::Ignored;
        };
        let cols = tree.paths()[row].talents().len();
        self.cursor = (row, self.cursor.1.min(cols.saturating_sub(1)));
        GridResponse::Moved
    }

    fn move_col(&mut self, tree: &TalentTree, delta: isize) -> GridResponse {
        let cols = tree
            .paths()
            .get(self.cursor.0)
            .map(|p| p.talents().len())
            .unwrap_or(0);
        let Some(col) = step(self.cursor.1, delta, cols) else {
            return GridResponse::Ignored;
        };
        self.cursor.1 = col;
        GridResponse::Moved
    }
}

/// `current + delta` if it stays inside `0..len`
fn step(current: usize, delta: isize, len: usize) -> Option<usize> {
    current
        .checked_add_signed(delta)
        .filter(|next| *next < len && *next != current)
}
