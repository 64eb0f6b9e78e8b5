use anyhow::{Result, anyhow};
use arboard::Clipboard;

/// Somewhere the chosen emoji can be written.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// System clipboard, opened on first use.
#[derive(Default)]
pub struct ClipboardService {
    clipboard: Option<Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self { clipboard: None }
    }
}

impl ClipboardSink for ClipboardService {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| anyhow!("Clipboard not available: {e}"))?;
            self.clipboard = Some(clipboard);
        }

        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| anyhow!("Failed to copy to clipboard: {e}")),
            None => Err(anyhow!("Clipboard not available")),
        }
    }
}
