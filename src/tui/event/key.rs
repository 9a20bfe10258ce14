use crate::tui::app::App;
use ratatui::crossterm::event::{KeyCode, KeyEvent};

pub fn handle(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.shutdown = true;
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        _ => {}
    }
}
