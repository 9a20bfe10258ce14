use ratatui::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct Theme;

impl Theme {
    /// The primary color for borders, focuses, and active elements.
    pub const PRIMARY: Color = Color::Rgb(46, 204, 113); // Emerald Green
    /// The secondary color for highlights and accents.
    pub const SECONDARY: Color = Color::Rgb(26, 188, 156); // Turquoise / Mint

    pub const ERROR: Color = Color::Red;

    // Text colors
    pub const TEXT_NORMAL: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;

    pub fn new() -> Self {
        Self
    }

    // --- Block / Border Styles ---

    pub fn block_active(&self) -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn block_inactive(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    // --- Text Styles ---

    pub fn text_normal(&self) -> Style {
        Style::default().fg(Self::TEXT_NORMAL)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    // --- Select Styles ---

    /// A selected item shown as a chip in multi-select mode
    pub fn badge(&self) -> Style {
        Style::default().bg(Color::DarkGray).fg(Self::TEXT_NORMAL)
    }

    pub fn clear_button(&self) -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    /// The option row under the pointer
    pub fn option_highlighted(&self) -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }

    /// An option that is part of the current value
    pub fn option_selected(&self) -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }
}
