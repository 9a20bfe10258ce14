use crate::tui::{
    components::{
        field::SelectField,
        select::{SelectComponent, SelectValue},
    },
    theme::Theme,
    utils::{text_width, truncate_to_width},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Height of the closed select box.
pub const CONTAINER_HEIGHT: u16 = 3;

/// ` × │ ▾ ` at the right edge of the box
const TAIL: [&str; 7] = [" ", "×", " ", "│", " ", "▾", " "];
const TAIL_WIDTH: u16 = TAIL.len() as u16;
const BADGE_SUFFIX: &str = " ×";

/// What sits under a pointer, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTarget {
    Option(usize),
    Badge(usize),
    Clear,
    Container,
    None,
}

/// Screen geometry of one select, shared by rendering and hit testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectLayout {
    pub container: Rect,
    pub value_area: Rect,
    pub tail: Option<Rect>,
    pub clear_button: Option<Rect>,
    pub badges: Vec<Rect>,
    pub options: Option<Rect>,
    pub option_rows: Vec<Rect>,
}

impl SelectLayout {
    /// `area` is where the closed box goes; the open list hangs below it and
    /// is clipped to `bounds`.
    pub fn compute(
        area: Rect,
        bounds: Rect,
        select: &SelectComponent,
        value: &SelectValue,
    ) -> Self {
        let container = Rect {
            height: area.height.min(CONTAINER_HEIGHT),
            ..area
        };
        let inner = Block::default().borders(Borders::ALL).inner(container);
        let row = Rect {
            height: inner.height.min(1),
            ..inner
        };

        // the tail only shows when there is room for at least one cell of value
        let (tail, clear_button, value_right) = if row.width > TAIL_WIDTH + 1 {
            let tail_x = row.right() - TAIL_WIDTH;
            let tail = Rect::new(tail_x, row.y, TAIL_WIDTH, row.height);
            let clear = Rect::new(tail_x + 1, row.y, 1, row.height);
            (Some(tail), Some(clear), tail_x)
        } else {
            (None, None, row.right())
        };

        let value_x = (row.x + 1).min(value_right);
        let value_area = Rect::new(value_x, row.y, value_right - value_x, row.height);

        let mut badges = Vec::new();
        if let SelectValue::Multiple(values) = value {
            let mut x = value_area.x;
            for option in values {
                let width = text_width(&option.label).saturating_add(text_width(BADGE_SUFFIX));
                if x.saturating_add(width) > value_area.right() {
                    break;
                }
                badges.push(Rect::new(x, value_area.y, width, value_area.height));
                x = x.saturating_add(width + 1);
            }
        }

        let (options, option_rows) = if select.is_open() {
            Self::options_geometry(container, bounds, select.options.len())
        } else {
            (None, Vec::new())
        };

        Self {
            container,
            value_area,
            tail,
            clear_button,
            badges,
            options,
            option_rows,
        }
    }

    fn options_geometry(container: Rect, bounds: Rect, count: usize) -> (Option<Rect>, Vec<Rect>) {
        let top = container.bottom();
        if top >= bounds.bottom() {
            return (None, Vec::new());
        }

        let wanted = u16::try_from(count.max(1)).unwrap_or(u16::MAX).saturating_add(2);
        let height = wanted.min(bounds.bottom() - top);
        let list = Rect::new(container.x, top, container.width, height);

        let inner = Block::default().borders(Borders::ALL).inner(list);
        let visible = usize::from(inner.height).min(count);
        let rows = (0..visible)
            .map(|i| Rect::new(inner.x, inner.y + i as u16, inner.width, 1))
            .collect();

        (Some(list), rows)
    }

    pub fn hit(&self, position: Position) -> SelectTarget {
        if let Some(i) = self.option_rows.iter().position(|r| r.contains(position)) {
            return SelectTarget::Option(i);
        }
        // the list is nested in the container, so its border counts as the container
        if self.options.is_some_and(|r| r.contains(position)) {
            return SelectTarget::Container;
        }
        if let Some(i) = self.badges.iter().position(|r| r.contains(position)) {
            return SelectTarget::Badge(i);
        }
        if self.clear_button.is_some_and(|r| r.contains(position)) {
            return SelectTarget::Clear;
        }
        if self.container.contains(position) {
            return SelectTarget::Container;
        }
        SelectTarget::None
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, field: &SelectField, focused: bool) {
    let theme = Theme::new();
    let layout = SelectLayout::compute(area, frame.area(), &field.component, &field.value);

    let border_style = if focused {
        theme.block_active()
    } else {
        theme.block_inactive()
    };
    let block = Block::default()
        .title(field.title.as_str())
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(block, layout.container);

    match &field.value {
        SelectValue::Single(current) => {
            if let Some(option) = current {
                let label = truncate_to_width(&option.label, layout.value_area.width);
                frame.render_widget(
                    Paragraph::new(label).style(theme.text_normal()),
                    layout.value_area,
                );
            }
        }
        SelectValue::Multiple(values) => {
            for (option, rect) in values.iter().zip(&layout.badges) {
                let badge = Line::from(vec![
                    Span::raw(option.label.as_str()),
                    Span::raw(BADGE_SUFFIX),
                ])
                .style(theme.badge());
                frame.render_widget(badge, *rect);
            }
        }
    }

    if let Some(tail) = layout.tail {
        let spans: Vec<Span> = TAIL
            .iter()
            .enumerate()
            .map(|(i, s)| match i {
                1 => Span::styled(*s, theme.clear_button()),
                _ => Span::styled(*s, theme.text_dim()),
            })
            .collect();
        frame.render_widget(Line::from(spans), tail);
    }

    if let Some(list_area) = layout.options {
        render_options(frame, list_area, &layout.option_rows, field);
    }
}

fn render_options(frame: &mut Frame<'_>, area: Rect, rows: &[Rect], field: &SelectField) {
    let theme = Theme::new();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.block_active()),
        area,
    );

    let select = &field.component;
    if select.options.is_empty() {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        frame.render_widget(
            Line::styled("No options", theme.text_dim()).centered(),
            inner,
        );
        return;
    }

    for (index, (option, rect)) in select.options.iter().zip(rows).enumerate() {
        let mut style = theme.text_normal();
        if select.is_option_selected(&field.value, option) {
            style = style.patch(theme.option_selected());
        }
        if index == select.highlighted_index() {
            style = style.patch(theme.option_highlighted());
        }
        let label = truncate_to_width(&option.label, rect.width.saturating_sub(1));
        frame.render_widget(Paragraph::new(format!(" {label}")).style(style), *rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::select::{OptionValue, SelectOption};
    use ratatui::{Terminal, backend::TestBackend};
    use std::rc::Rc;

    const BOUNDS: Rect = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 20,
    };

    fn field(multiple: bool) -> SelectField {
        SelectField::new(
            "Letter",
            vec![
                SelectOption::new("A", OptionValue::Int(1)),
                SelectOption::new("B", OptionValue::Int(2)),
                SelectOption::new("Charlie", OptionValue::Text("c".into())),
            ],
            multiple,
        )
    }

    fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn closed_select_has_no_option_rows() {
        let f = field(false);
        let layout = SelectLayout::compute(Rect::new(0, 0, 30, 3), BOUNDS, &f.component, &f.value);
        assert!(layout.options.is_none());
        assert!(layout.option_rows.is_empty());
        assert_eq!(layout.clear_button, Some(Rect::new(23, 1, 1, 1)));
        assert_eq!(layout.hit(Position::new(23, 1)), SelectTarget::Clear);
        assert_eq!(layout.hit(Position::new(5, 1)), SelectTarget::Container);
        assert_eq!(layout.hit(Position::new(5, 5)), SelectTarget::None);
    }

    #[test]
    fn open_list_rows_hang_below_container() {
        let mut f = field(false);
        f.component.toggle_open();
        let layout = SelectLayout::compute(Rect::new(0, 0, 30, 3), BOUNDS, &f.component, &f.value);

        assert_eq!(layout.options, Some(Rect::new(0, 3, 30, 5)));
        assert_eq!(layout.option_rows.len(), 3);
        assert_eq!(layout.hit(Position::new(4, 4)), SelectTarget::Option(0));
        assert_eq!(layout.hit(Position::new(4, 6)), SelectTarget::Option(2));
        assert_eq!(layout.hit(Position::new(0, 5)), SelectTarget::Container);
    }

    #[test]
    fn open_list_is_clipped_to_bounds() {
        let mut f = field(false);
        f.component.toggle_open();
        let bounds = Rect::new(0, 0, 30, 6);
        let layout = SelectLayout::compute(Rect::new(0, 0, 30, 3), bounds, &f.component, &f.value);

        assert_eq!(layout.options, Some(Rect::new(0, 3, 30, 3)));
        assert_eq!(layout.option_rows.len(), 1);
        assert_eq!(layout.hit(Position::new(4, 5)), SelectTarget::Container);
    }

    #[test]
    fn badges_that_do_not_fit_are_not_hittable() {
        let mut f = field(true);
        f.value = SelectValue::Multiple(f.component.options.iter().rev().cloned().collect());
        // value area spans x = 2..9: "Charlie ×" needs 9 cells
        let layout = SelectLayout::compute(Rect::new(0, 0, 17, 3), BOUNDS, &f.component, &f.value);
        assert!(layout.badges.is_empty());

        f.value = SelectValue::Multiple(vec![
            Rc::clone(&f.component.options[0]),
            Rc::clone(&f.component.options[1]),
        ]);
        let layout = SelectLayout::compute(Rect::new(0, 0, 17, 3), BOUNDS, &f.component, &f.value);
        assert_eq!(
            layout.badges,
            vec![Rect::new(2, 1, 3, 1), Rect::new(6, 1, 3, 1)]
        );
        assert_eq!(layout.hit(Position::new(3, 1)), SelectTarget::Badge(0));
        assert_eq!(layout.hit(Position::new(5, 1)), SelectTarget::Container);
        assert_eq!(layout.hit(Position::new(8, 1)), SelectTarget::Badge(1));
    }

    #[test]
    fn renders_title_value_and_open_options() {
        let mut f = field(false);
        f.value = SelectValue::Single(Some(Rc::clone(&f.component.options[2])));
        f.component.toggle_open();

        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 30, 3), &f, true))
            .unwrap();

        let rows = rows(&terminal);
        assert!(rows[0].contains("Letter"));
        assert!(rows[1].contains("Charlie"));
        assert!(rows[1].contains("× │ ▾"));
        assert!(rows[4].contains(" A"));
        assert!(rows[6].contains(" Charlie"));
    }

    #[test]
    fn renders_badges_in_multiple_mode() {
        let mut f = field(true);
        f.value = SelectValue::Multiple(vec![
            Rc::clone(&f.component.options[1]),
            Rc::clone(&f.component.options[0]),
        ]);

        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 30, 3), &f, false))
            .unwrap();

        assert!(rows(&terminal)[1].contains("B × A ×"));
    }
}
