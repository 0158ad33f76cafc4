pub mod clipboard;
pub mod export;
pub mod highlight;

pub use clipboard::{clipboard_payload, Clipboard, MemoryClipboard};
pub use export::{parse_csv, to_csv, write_csv, EXPORT_FILE_NAME};
pub use highlight::{highlight, HighlightMarker};
