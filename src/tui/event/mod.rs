use super::app::App;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::Rect;

mod key;
mod mouse;

pub fn handle_event(app: &mut App, area: Rect) -> Result<(), Box<dyn std::error::Error>> {
    dispatch(app, event::read()?, area);
    Ok(())
}

/// Route one terminal event. `area` is the full terminal area the last frame
/// was drawn into.
pub fn dispatch(app: &mut App, event: Event, area: Rect) {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return;
            }
            key::handle(app, key);
        }
        Event::Mouse(mouse) => mouse::handle(app, mouse, area),
        Event::FocusLost => app.blur_focused(),
        _ => {}
    }
}
