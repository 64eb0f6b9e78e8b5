//! Constants for the interactive picker
//!
//! Cache layout, timing and layout values used across the picker.

// Dataset cache
/// Where the emoji dataset is downloaded from
pub const EMOJI_DATASET_URL: &str =
    "https://github.com/muan/emojilib/raw/refs/tags/v4.0.0/dist/emoji-en-US.json";

/// Directory created under the user data directory
pub const CACHE_DIR_NAME: &str = "emoji-picker";

/// Cached dataset file name
pub const DATASET_FILE_NAME: &str = "emojis.json";

/// Cache metadata file name
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Version tag recorded in the cache metadata
pub const CACHE_FORMAT_VERSION: &str = "1.0";

// Timing constants
/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

// UI Layout constants
/// Height of the title line
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the status line under the grid
pub const STATUS_HEIGHT: u16 = 1;

/// Height of the key help line
pub const HELP_HEIGHT: u16 = 1;

/// Placeholder shown in an empty search box
pub const SEARCH_PLACEHOLDER: &str = "Type to search emojis...";
