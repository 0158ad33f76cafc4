pub mod commands;
pub mod controller;
pub mod events;
pub mod state;

pub use controller::{ExtractionController, ExtractionOutcome, ExtractionRequest};
pub use events::{ChannelEmitter, EventEmitter, LogEmitter, SessionEvent};
pub use state::{InFlightSlot, SessionState, SessionStatus, HISTORY_CAPACITY};
