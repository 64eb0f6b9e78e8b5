use crate::config::Config;
use crate::interactive::application::search_index::SearchIndex;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::{Key, Message};
use std::ops::Range;
use tracing::{debug, warn};

// Re-export for callers that only need the state types
pub use crate::interactive::domain::models::{Focus, LoadStatus};

/// The picker session. Only `update` mutates it, one message at a time.
pub struct AppState {
    pub config: Config,
    pub status: LoadStatus,
    /// Present once the dataset has loaded
    pub index: Option<SearchIndex>,
    pub query: String,
    pub filtered: Vec<String>,
    pub selected_index: usize,
    pub page: usize,
    pub focus: Focus,
    /// Present only in `LoadStatus::Error`
    pub error: Option<String>,
}

/// One emoji slot in the visible grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell<'a> {
    pub index: usize,
    pub emoji: &'a str,
    pub selected: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            status: LoadStatus::Loading,
            index: None,
            query: String::new(),
            filtered: Vec::new(),
            selected_index: 0,
            page: 0,
            focus: Focus::Query,
            error: None,
        }
    }

    /// Apply one message. Never performs I/O; side effects come back as a `Command`.
    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::DatasetLoaded(result) => {
                if self.status != LoadStatus::Loading {
                    warn!("Ignoring dataset delivered after load finished");
                    return Command::None;
                }
                match result {
                    Ok(dataset) => {
                        let index = SearchIndex::new(&dataset);
                        self.filtered = index.filter(&self.query);
                        self.index = Some(index);
                        self.status = LoadStatus::Ready;
                        self.clamp_selection();
                        debug!("Dataset ready, {} emoji", self.filtered.len());
                    }
                    Err(e) => {
                        warn!("Dataset load failed: {e}");
                        self.status = LoadStatus::Error;
                        self.error = Some(e.to_string());
                    }
                }
                Command::None
            }
            Message::Key(key) => self.handle_key(key),
            Message::TextEdit(value) => {
                if self.focus != Focus::Query || self.status == LoadStatus::Error {
                    return Command::None;
                }
                if value != self.query {
                    self.query = value;
                    if let Some(index) = &self.index {
                        self.filtered = index.filter(&self.query);
                        self.clamp_selection();
                    }
                }
                Command::None
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> Command {
        if key == Key::Quit {
            return Command::Quit;
        }
        // Focus can be moved before the dataset arrives
        if key == Key::ToggleFocus && self.status == LoadStatus::Loading {
            self.focus = self.focus.toggled();
            return Command::None;
        }
        if self.status != LoadStatus::Ready {
            return Command::None;
        }

        match key {
            Key::Quit => Command::Quit,
            Key::ToggleFocus => {
                self.focus = self.focus.toggled();
                Command::None
            }
            Key::Select => {
                if self.focus != Focus::Grid {
                    return Command::None;
                }
                match self.filtered.get(self.selected_index) {
                    Some(emoji) => Command::Batch(vec![
                        Command::CopyToClipboard(emoji.clone()),
                        Command::Quit,
                    ]),
                    None => Command::None,
                }
            }
            Key::Up | Key::Down | Key::Left | Key::Right => {
                if self.focus != Focus::Grid || self.filtered.is_empty() {
                    return Command::None;
                }
                let columns = self.config.grid_columns();
                let last = self.filtered.len() - 1;
                let current = self.selected_index;

                self.selected_index = match key {
                    Key::Up => current.saturating_sub(columns),
                    Key::Down => current.saturating_add(columns).min(last),
                    Key::Left => current.saturating_sub(1),
                    _ => current.saturating_add(1).min(last),
                };
                self.sync_page();
                Command::None
            }
        }
    }

    /// Keep the selection inside the filtered list after it changes.
    fn clamp_selection(&mut self) {
        self.selected_index = match self.filtered.len() {
            0 => 0,
            len => self.selected_index.min(len - 1),
        };
        self.sync_page();
    }

    fn sync_page(&mut self) {
        self.page = self.selected_index / self.config.max_results();
    }

    /// Filtered-list indices shown on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let per_page = self.config.max_results();
        let start = (self.page * per_page).min(self.filtered.len());
        let end = (start + per_page).min(self.filtered.len());
        start..end
    }

    /// The highlighted cell, only while the grid has focus.
    pub fn highlighted_index(&self) -> Option<usize> {
        let has_cursor = self.status == LoadStatus::Ready
            && self.focus == Focus::Grid
            && self.selected_index < self.filtered.len();
        has_cursor.then_some(self.selected_index)
    }

    /// The current page laid out in rows of `grid_columns`.
    pub fn visible_rows(&self) -> Vec<Vec<GridCell<'_>>> {
        let range = self.visible_range();
        let highlighted = self.highlighted_index();

        self.filtered[range.clone()]
            .chunks(self.config.grid_columns())
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, emoji)| {
                        let index = range.start + row * self.config.grid_columns() + col;
                        GridCell {
                            index,
                            emoji: emoji.as_str(),
                            selected: highlighted == Some(index),
                        }
                    })
                    .collect()
            })
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.config.max_results())
    }
}

/// By-value form of [`AppState::update`].
pub fn transition(mut state: AppState, msg: Message) -> (AppState, Command) {
    let command = state.update(msg);
    (state, command)
}
