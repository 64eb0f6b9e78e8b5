use crate::interactive::ui::components::Component;
use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

/// Draws the lines produced by `view::render_lines`.
#[derive(Default)]
pub struct EmojiGrid {
    lines: Vec<Line<'static>>,
}

impl EmojiGrid {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn set_lines(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
    }
}

impl Component for EmojiGrid {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.lines.clone()), area);
    }
}
