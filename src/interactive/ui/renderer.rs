use crate::interactive::constants::{HELP_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_HEIGHT, TITLE_HEIGHT};
use crate::interactive::ui::app_state::{AppState, Focus};
use crate::interactive::ui::components::{
    Component, emoji_grid::EmojiGrid, search_bar::SearchBar,
};
use crate::interactive::ui::theme::Theme;
use crate::interactive::ui::view;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};

const TITLE: &str = "Emoji Picker";

/// Minimum grid height in terminal rows, saturating at what a layout can hold.
pub(crate) fn grid_min_height(grid_rows: usize) -> u16 {
    u16::try_from(grid_rows).unwrap_or(u16::MAX)
}

pub struct Renderer {
    search_bar: SearchBar,
    emoji_grid: EmojiGrid,
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            search_bar: SearchBar::new(theme),
            emoji_grid: EmojiGrid::new(),
            theme,
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(grid_min_height(state.config.grid_rows())),
                Constraint::Length(STATUS_HEIGHT),
                Constraint::Length(HELP_HEIGHT),
            ])
            .split(f.area());

        let title = Paragraph::new(Line::from(Span::styled(TITLE, self.theme.title)));
        f.render_widget(title, chunks[0]);

        self.search_bar.set_query(&state.query);
        self.search_bar.set_focused(state.focus == Focus::Query);
        self.search_bar.render(f, chunks[1]);

        self.emoji_grid
            .set_lines(view::render_lines(state, &self.theme));
        self.emoji_grid.render(f, chunks[2]);

        f.render_widget(Paragraph::new(view::status_line(state, &self.theme)), chunks[3]);
        f.render_widget(Paragraph::new(view::help_line(&self.theme)), chunks[4]);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }
}
