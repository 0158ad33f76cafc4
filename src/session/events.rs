use log::{debug, error};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::{
    metrics::ExtractionStats,
    models::{ExtractionRecord, KeywordResult},
};

/// Notifications pushed to the presentation layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum SessionEvent {
    KeywordsExtracted(Vec<KeywordResult>),
    StatsUpdated(ExtractionStats),
    HistoryChanged(Vec<ExtractionRecord>),
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::KeywordsExtracted(_) => "keywords-extracted",
            SessionEvent::StatsUpdated(_) => "stats-updated",
            SessionEvent::HistoryChanged(_) => "history-changed",
        }
    }
}

pub trait EventEmitter: Send + Sync {
    fn emit(&self, event: &SessionEvent);
}

/// Writes each event as JSON to the debug log. Used when no host is attached.
#[derive(Debug, Default, Clone)]
pub struct LogEmitter;

impl EventEmitter for LogEmitter {
    fn emit(&self, event: &SessionEvent) {
        match serde_json::to_string(event) {
            Ok(json) => debug!("{} {}", event.name(), json),
            Err(err) => error!("Failed to serialize {}: {err}", event.name()),
        }
    }
}

/// Forwards events over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelEmitter {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl ChannelEmitter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventEmitter for ChannelEmitter {
    fn emit(&self, event: &SessionEvent) {
        if self.tx.send(event.clone()).is_err() {
            debug!("Event receiver dropped; discarding event");
        }
    }
}
