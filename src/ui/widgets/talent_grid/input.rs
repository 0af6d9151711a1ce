//! Keyboard/mouse input handling and the interactive loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use talent_calc::{RepaintFlag, TalentCalculator};

use super::grid::{GridAction, GridResponse, TalentGrid};
use super::render::{render_grid, render_help_bar, GridLayout};

/// Convert a keyboard event to a GridAction
pub fn key_to_action(key: KeyEvent) -> Option<GridAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GridAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(GridAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(GridAction::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(GridAction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(GridAction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GridAction::Select),
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('x') => Some(GridAction::Deselect),
        KeyCode::Char('q') | KeyCode::Esc => Some(GridAction::Quit),
        _ => None,
    }
}

/// Convert a mouse click on a talent cell to a GridAction
pub fn mouse_to_action(mouse: MouseEvent, layout: &GridLayout) -> Option<GridAction> {
    let MouseEventKind::Down(button) = mouse.kind else {
        return None;
    };
    let (path, talent) = layout.hit(mouse.column, mouse.row)?;
    match button {
        MouseButton::Left => Some(GridAction::SelectAt(path.clone(), talent)),
        MouseButton::Right => Some(GridAction::DeselectAt(path.clone(), talent)),
        MouseButton::Middle => None,
    }
}

/// Raw mode + alternate screen for the lifetime of the guard
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> std::io::Result<Self> {
        use crossterm::{cursor, event, execute, terminal};

        terminal::enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        if mouse {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(Self { mouse })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::{cursor, event, execute, terminal};

        let mut stdout = std::io::stdout();
        if self.mouse {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the talent grid until the user quits.
///
/// `repaint` must be registered as a sink on `calculator`; select/deselect
/// redraw only when it has been raised.
pub fn run_interactive(
    calculator: &mut TalentCalculator,
    repaint: &RepaintFlag,
    supports_color: bool,
    supports_unicode: bool,
    supports_mouse: bool,
) -> std::io::Result<()> {
    use crossterm::event::{self, Event, KeyEventKind};

    let _guard = TerminalGuard::enter(supports_mouse)?;
    let mut grid = TalentGrid::new();

    let mut layout = draw(calculator, &grid, supports_color, supports_unicode)?;

    loop {
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_to_action(key),
            Event::Mouse(mouse) => mouse_to_action(mouse, &layout),
            Event::Resize(_, _) => {
                layout = draw(calculator, &grid, supports_color, supports_unicode)?;
                None
            }
            _ => None,
        };
        let Some(action) = action else { continue };

        let redraw = match grid.handle_action(action, calculator) {
            GridResponse::Quit => break,
            GridResponse::Moved => true,
            GridResponse::Activated => repaint.take(),
            GridResponse::Ignored => false,
        };
        if redraw {
            layout = draw(calculator, &grid, supports_color, supports_unicode)?;
        }
    }

    Ok(())
}

fn draw(
    calculator: &TalentCalculator,
    grid: &TalentGrid,
    supports_color: bool,
    supports_unicode: bool,
) -> std::io::Result<GridLayout> {
    use crossterm::{cursor, queue, style, terminal};
    use std::io::Write;

    let rendered = render_grid(
        calculator.tree(),
        Some(grid.cursor()),
        grid.notice(),
        supports_color,
        supports_unicode,
    );

    let mut stdout = std::io::stdout().lock();
    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
    let help_row = rendered.lines.len() + 1;
    for (row, line) in rendered.lines.iter().enumerate() {
        queue!(stdout, cursor::MoveTo(0, row as u16), style::Print(line))?;
    }
    queue!(
        stdout,
        cursor::MoveTo(0, help_row as u16),
        style::Print(render_help_bar(supports_unicode))
    )?;
    stdout.flush()?;

    Ok(rendered.layout)
}
