use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span, Text},
};

use crate::tui::{app::App, theme::Theme};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let version_info = Text::from(vec![Line::raw(format!(
        "Term-Select {}",
        env!("CARGO_PKG_VERSION")
    ))])
    .right_aligned();

    let mut help_text = vec![
        Span::raw("Esc/Q: Quit"),
        Span::raw("  Click: Open/Select"),
        Span::raw("  ×: Clear"),
    ];
    if app.focused.is_some_and(|i| app.fields[i].is_multiple()) {
        help_text.push(Span::raw("  Click badge: Remove"));
    }
    help_text.push(Span::raw("  Tab: Next field"));

    let help = Text::from(Line::from(help_text))
        .left_aligned()
        .style(Theme::new().text_dim());

    frame.render_widget(help, area);
    frame.render_widget(version_info, area);
}
