use std::sync::Mutex;

use anyhow::{anyhow, Result};

use crate::models::KeywordResult;

/// System clipboard as provided by the host.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Keywords joined by ", " with no trailing separator.
pub fn clipboard_payload(keywords: &[KeywordResult]) -> String {
    keywords
        .iter()
        .map(|k| k.keyword.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Clipboard kept in memory, for headless hosts.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}
