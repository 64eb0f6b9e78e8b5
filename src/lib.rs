pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;

pub use config::Config;
pub use error::{ErrorKind, PickerError, PickerResult};
pub use interactive::EmojiPicker;
pub use interactive::application::cache_service::{CacheService, default_data_dir};
pub use interactive::domain::{dataset::Dataset, models::Outcome};
pub use interactive::ui::theme::Theme;
