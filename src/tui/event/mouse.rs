use crate::tui::app::App;
use crate::tui::ui::field_layouts;
use crate::tui::widgets::select::{SelectLayout, SelectTarget};
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::{Position, Rect};

pub fn handle(app: &mut App, mouse: MouseEvent, area: Rect) {
    let position = Position::new(mouse.column, mouse.row);
    let layouts = field_layouts(app, area);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match target_at(app.focused, &layouts, position) {
                Some((index, target)) => {
                    app.focus(index);
                    app.dispatch(index, target);
                }
                None => app.blur_focused(),
            }
        }
        MouseEventKind::Moved => {
            if let Some(index) = app.focused
                && let Some(layout) = layouts.get(index)
                && let SelectTarget::Option(i) = layout.hit(position)
            {
                app.fields[index].component.hover(i);
            }
        }
        _ => {}
    }
}

/// The focused field is tested first: its open list overlays the fields
/// drawn below it.
fn target_at(
    focused: Option<usize>,
    layouts: &[SelectLayout],
    position: Position,
) -> Option<(usize, SelectTarget)> {
    let order = focused
        .into_iter()
        .chain((0..layouts.len()).filter(|&i| Some(i) != focused));

    for index in order {
        let Some(layout) = layouts.get(index) else {
            continue;
        };
        match layout.hit(position) {
            SelectTarget::None => continue,
            target => return Some((index, target)),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::tui::app::App;
    use crate::tui::components::field::SelectField;
    use crate::tui::components::select::{OptionValue, SelectOption};
    use crate::tui::event::dispatch;
    use crate::tui::ui::field_areas;
    use ratatui::crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };
    use ratatui::prelude::Rect;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 24,
    };

    fn app() -> App {
        let options = vec![
            SelectOption::new("A", OptionValue::Int(1)),
            SelectOption::new("B", OptionValue::Int(2)),
        ];
        App::new(vec![
            SelectField::new("Single", options.clone(), false),
            SelectField::new("Multiple", options, true),
        ])
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn click(app: &mut App, column: u16, row: u16) {
        dispatch(
            app,
            mouse(MouseEventKind::Down(MouseButton::Left), column, row),
            AREA,
        );
    }

    #[test]
    fn click_sequence_selects_option_a() {
        let mut app = app();
        let first = field_areas(AREA, app.fields.len())[0];

        click(&mut app, first.x + 3, first.y + 1);
        assert_eq!(app.focused, Some(0));
        assert!(app.fields[0].component.is_open());

        // first option row sits inside the list hanging below the box
        click(&mut app, first.x + 3, first.bottom() + 1);
        assert!(!app.fields[0].component.is_open());
        assert_eq!(app.fields[0].output_line(), "Single=A");
    }

    #[test]
    fn open_list_covers_the_field_below() {
        let mut app = app();
        let areas = field_areas(AREA, app.fields.len());
        let (first, second) = (areas[0], areas[1]);

        click(&mut app, first.x + 3, first.y + 1);
        // the first option row lands on the top border of the second box
        let row = first.bottom() + 1;
        assert_eq!(row, second.y);
        click(&mut app, first.x + 3, row);

        assert_eq!(app.focused, Some(0));
        assert_eq!(app.fields[0].output_line(), "Single=A");
        assert!(!app.fields[1].component.is_open());
    }

    #[test]
    fn hover_moves_highlight_and_reopen_resets_it() {
        let mut app = app();
        let first = field_areas(AREA, app.fields.len())[0];

        click(&mut app, first.x + 3, first.y + 1);
        dispatch(
            &mut app,
            mouse(MouseEventKind::Moved, first.x + 3, first.bottom() + 2),
            AREA,
        );
        assert_eq!(app.fields[0].component.highlighted_index(), 1);

        click(&mut app, first.x + 3, first.y + 1);
        click(&mut app, first.x + 3, first.y + 1);
        assert_eq!(app.fields[0].component.highlighted_index(), 0);
    }

    #[test]
    fn clicking_elsewhere_or_losing_focus_closes() {
        let mut app = app();
        let first = field_areas(AREA, app.fields.len())[0];

        click(&mut app, first.x + 3, first.y + 1);
        click(&mut app, first.x + 3, AREA.bottom() - 1);
        assert!(!app.fields[0].component.is_open());
        assert_eq!(app.focused, None);

        click(&mut app, first.x + 3, first.y + 1);
        dispatch(&mut app, Event::FocusLost, AREA);
        assert!(!app.fields[0].component.is_open());
    }

    #[test]
    fn clear_button_does_not_open() {
        let mut app = app();
        let first = field_areas(AREA, app.fields.len())[0];
        let clear_x = first.right() - 7;

        click(&mut app, clear_x, first.y + 1);
        assert_eq!(app.focused, Some(0));
        assert!(!app.fields[0].component.is_open());
        assert_eq!(app.status_message.as_deref(), Some("Single: (none)"));
    }

    #[test]
    fn keys_move_focus_and_quit() {
        let mut app = app();
        let press = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        dispatch(&mut app, press(KeyCode::Tab), AREA);
        assert_eq!(app.focused, Some(0));
        dispatch(&mut app, press(KeyCode::BackTab), AREA);
        assert_eq!(app.focused, Some(1));

        let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        dispatch(&mut app, Event::Key(release), AREA);
        assert!(!app.shutdown);

        dispatch(&mut app, press(KeyCode::Char('q')), AREA);
        assert!(app.shutdown);
    }
}
