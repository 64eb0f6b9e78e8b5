use crate::interactive::constants::SEARCH_PLACEHOLDER;
use crate::interactive::ui::components::{Component, text_input::TextInput};
use crate::interactive::ui::events::Message;
use crate::interactive::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The query box. Emits `Message::TextEdit` whenever the text changes.
#[derive(Default)]
pub struct SearchBar {
    text_input: TextInput,
    focused: bool,
    theme: Theme,
}

impl SearchBar {
    pub fn new(theme: Theme) -> Self {
        Self {
            text_input: TextInput::new(),
            focused: true,
            theme,
        }
    }

    /// Sync with the state's query. Keeps the cursor if the text is unchanged.
    pub fn set_query(&mut self, query: &str) {
        if self.text_input.text() != query {
            self.text_input.set_text(query.to_string());
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn get_query(&self) -> &str {
        self.text_input.text()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let content = if self.focused {
            self.text_input.render_cursor_spans(self.theme.cursor)
        } else if self.text_input.text().is_empty() {
            vec![Span::styled(SEARCH_PLACEHOLDER, self.theme.placeholder)]
        } else {
            vec![Span::raw(self.text_input.text().to_string())]
        };

        let title = if self.focused { "Search" } else { "Search (tab to edit)" };

        let input = Paragraph::new(Line::from(content))
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(self.theme.input);

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.text_input.handle_key(key) {
            Some(Message::TextEdit(self.text_input.text().to_string()))
        } else {
            None
        }
    }
}
