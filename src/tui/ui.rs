use super::app::App;
use super::widgets::select::{self, CONTAINER_HEIGHT, SelectLayout};
use super::widgets::{bottom, header};
use ratatui::prelude::*;

const FIELD_GAP: u16 = 1;

fn main_area(area: Rect) -> Rect {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .split(area)[1]
}

/// Boxes for up to `count` fields stacked in the main area. Fields that do
/// not fit get no box.
pub fn field_areas(area: Rect, count: usize) -> Vec<Rect> {
    let main = main_area(area);
    let x = main.x.saturating_add(1);
    let width = main.width.saturating_sub(2);

    let mut areas = Vec::new();
    let mut y = main.y;
    for _ in 0..count {
        if y.saturating_add(CONTAINER_HEIGHT) > main.bottom() {
            break;
        }
        areas.push(Rect::new(x, y, width, CONTAINER_HEIGHT));
        y = y.saturating_add(CONTAINER_HEIGHT + FIELD_GAP);
    }
    areas
}

pub fn field_layouts(app: &App, area: Rect) -> Vec<SelectLayout> {
    field_areas(area, app.fields.len())
        .into_iter()
        .zip(&app.fields)
        .map(|(rect, field)| SelectLayout::compute(rect, area, &field.component, &field.value))
        .collect()
}

pub fn ui(frame: &mut Frame<'_>, app: &App) {
    let layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .split(frame.area());

    header::render(frame, layout[0], app);
    bottom::render(frame, layout[2], app);

    let areas = field_areas(frame.area(), app.fields.len());
    // the focused field goes last so its open list is drawn over the others
    let mut order: Vec<usize> = (0..areas.len()).filter(|&i| Some(i) != app.focused).collect();
    order.extend(app.focused.filter(|&i| i < areas.len()));

    for index in order {
        select::render(
            frame,
            areas[index],
            &app.fields[index],
            app.focused == Some(index),
        );
    }
}
