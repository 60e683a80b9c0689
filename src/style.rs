//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;

    pub const FG: Color = Color::White;
    pub const HEADER_FG: Color = Color::White;
    pub const CHECKBOX_FG: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Body cell text.
    pub fn cell() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar and header buttons.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Row checkboxes.
    pub fn checkbox() -> Style {
        Style::default().fg(Theme::CHECKBOX_FG).bg(Theme::BG)
    }
}
