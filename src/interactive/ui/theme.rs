use ratatui::style::{Color, Modifier, Style};

const PINK: Color = Color::Rgb(0xFF, 0x75, 0xB7);

/// Styles used by the picker. Passed to the renderer rather than kept global.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub selected: Style,
    pub error: Style,
    pub input: Style,
    pub placeholder: Style,
    pub cursor: Style,
    pub dimmed: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(PINK).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(PINK).fg(Color::White),
            error: Style::default().fg(Color::Red),
            input: Style::default().fg(Color::Yellow),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().bg(Color::White).fg(Color::Black),
            dimmed: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// No colors at all, for `NO_COLOR` terminals.
    pub fn plain() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            error: Style::default(),
            input: Style::default(),
            placeholder: Style::default(),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            dimmed: Style::default(),
        }
    }
}
