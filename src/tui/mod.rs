use crate::tui::app::App;
use crate::tui::components::field::SelectField;

pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;
pub mod utils;
pub mod widgets;

pub fn run(fields: Vec<SelectField>) -> Result<Vec<SelectField>, Box<dyn std::error::Error>> {
    App::run(fields)
}
