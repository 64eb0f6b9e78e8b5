use crate::error::PickerError;
use crate::interactive::domain::dataset::Dataset;

/// Keys the state machine understands, already resolved from raw terminal input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Quit,
    ToggleFocus,
    Select,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub fn is_directional(self) -> bool {
        matches!(self, Key::Up | Key::Down | Key::Left | Key::Right)
    }
}

#[derive(Debug)]
pub enum Message {
    // Delivered once by the loader thread
    DatasetLoaded(Result<Dataset, PickerError>),

    // Input events
    Key(Key),
    TextEdit(String),
}
