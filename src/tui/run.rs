//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Single-threaded: the loop blocks on the next terminal event, applies
//! it synchronously, and redraws. There is no background work to wait on.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::state::{Action, App, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Printable
/// characters always map to `Insert`; the sanitizer decides later
/// whether they reach the field.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearField),
            KeyCode::Char('a') => Some(Action::Home),
            KeyCode::Char('e') => Some(Action::End),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),

        // Focus
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),

        // Cursor
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::Home),
        KeyCode::End => Some(Action::End),

        // Editing
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Char(c) => Some(Action::Insert(c)),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive editor until the user quits.
pub fn run(mut app: App) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    log::info!("interactive session started");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    log::info!(
        "interactive session ended with {:?}",
        app.classification.category
    );
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        match event::read()? {
            // Windows reports key releases too; act on presses only.
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = map_key(key) {
                    if update(app, action) == Transition::Quit {
                        log::debug!("quit requested");
                    }
                }
            }
            Event::Resize(width, height) => {
                log::trace!("resized to {width}x{height}");
            }
            _ => {} // ignore mouse, focus, paste
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
