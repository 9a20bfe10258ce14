use super::event::handle_event;
use super::ui::ui;
use crate::tui::components::field::SelectField;
use crate::tui::components::select::SelectValue;
use crate::tui::widgets::select::SelectTarget;
use ratatui::crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::{Backend, Rect};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, info};

use std::io;

pub struct App {
    pub fields: Vec<SelectField>,
    pub focused: Option<usize>,
    pub shutdown: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(fields: Vec<SelectField>) -> App {
        App {
            fields,
            focused: None,
            shutdown: false,
            status_message: None,
        }
    }

    /// Move focus to `index`, closing the field that loses it.
    pub fn focus(&mut self, index: usize) {
        if index >= self.fields.len() || self.focused == Some(index) {
            return;
        }
        self.blur_focused();
        debug!(field = %self.fields[index].title, "focus");
        self.focused = Some(index);
    }

    pub fn blur_focused(&mut self) {
        if let Some(index) = self.focused.take() {
            self.fields[index].component.blur();
        }
    }

    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let next = match self.focused {
            Some(i) => (i + 1) % self.fields.len(),
            None => 0,
        };
        self.focus(next);
    }

    pub fn focus_previous(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len();
        let previous = match self.focused {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.focus(previous);
    }

    /// Apply a pointer target to field `index`. Clear and badge clicks never
    /// reach the container toggle.
    pub fn dispatch(&mut self, index: usize, target: SelectTarget) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };

        let mut changed = None;
        let mut on_change = |value: SelectValue| changed = Some(value);
        let select = &mut field.component;
        match target {
            SelectTarget::Option(i) => select.click_option(i, &field.value, &mut on_change),
            SelectTarget::Badge(i) => select.click_badge(i, &field.value, &mut on_change),
            SelectTarget::Clear => select.click_clear(&field.value, &mut on_change),
            SelectTarget::Container => select.toggle_open(),
            SelectTarget::None => {}
        }

        if let Some(value) = changed {
            self.on_change(index, value);
        }
    }

    fn on_change(&mut self, index: usize, value: SelectValue) {
        let field = &mut self.fields[index];
        field.value = value;

        let summary = if field.value.is_empty() {
            "(none)".to_string()
        } else {
            field.value.summary()
        };
        debug!(field = %field.title, value = %summary, "change");
        self.status_message = Some(format!("{}: {}", field.title, summary));
    }

    /// Run the UI until the user quits and hand back the fields with their
    /// final values.
    pub fn run(
        fields: Vec<SelectField>,
    ) -> Result<Vec<SelectField>, Box<dyn std::error::Error>> {
        let mut app = App::new(fields);
        info!(fields = app.fields.len(), "starting ui");

        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(
            stderr,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend)?;

        let res = run_app(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        res.map(|_| app.fields)
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.shutdown {
            return Ok(());
        }

        terminal.draw(|frame| ui(frame, app))?;

        let size = terminal.size()?;
        handle_event(app, Rect::new(0, 0, size.width, size.height))?;
    }
}
