//! Keyboard input handling for the TUI.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Route};

/// Handle a key event. Returns `true` when the application should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),

        // Route switching
        KeyCode::Char('1') => app.route = Route::Home,
        KeyCode::Char('2') => app.route = Route::Characters,
        KeyCode::Tab => app.route = app.route.toggle(),

        // Pagination
        KeyCode::Char('n') | KeyCode::Right => app.next_page(),
        KeyCode::Char('p') | KeyCode::Left => app.prev_page(),
        KeyCode::Char('r') => app.refresh(),

        // Cache
        KeyCode::Char('x') => app.clear_cache(),

        // List navigation
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),

        _ => {}
    }

    Ok(false)
}
