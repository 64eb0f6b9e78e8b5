use serde::{Deserialize, Serialize};

/// Where the dataset load stands. `Loading` is initial; the other two are final.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadStatus {
    Loading,
    Ready,
    Error,
}

/// Which widget receives key events.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Query,
    Grid,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Query => Focus::Grid,
            Focus::Grid => Focus::Query,
        }
    }
}

/// Written next to the cached dataset. Not checked on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheMetadata {
    pub version: String,
}

/// How a session ended, reported back to `main`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Cancelled,
    Selected(String),
    Failed(String),
}
