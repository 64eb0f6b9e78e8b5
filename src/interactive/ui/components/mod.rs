pub mod emoji_grid;
pub mod search_bar;
pub mod text_input;


use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
