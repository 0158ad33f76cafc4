use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::{
    error::{ExtractorError, ExtractorResult},
    extraction::Algorithm,
    models::{CurrentSelection, ExtractionRecord, KeywordResult},
};

/// History never holds more than this many records.
pub const HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    #[default]
    Idle,
    Extracting,
}

/// The single extraction allowed in flight, with its cancellation token.
///
/// Claiming the slot and registering the token happen under one lock, so a
/// claimed slot is always cancellable.
#[derive(Debug, Default)]
pub struct InFlightSlot {
    token: Mutex<Option<CancellationToken>>,
}

impl InFlightSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn status(&self) -> SessionStatus {
        if self.lock().is_some() {
            SessionStatus::Extracting
        } else {
            SessionStatus::Idle
        }
    }

    pub fn claim(self: &Arc<Self>) -> ExtractorResult<InFlightClaim> {
        let mut slot = self.lock();
        if slot.is_some() {
            return Err(ExtractorError::Busy);
        }
        let token = CancellationToken::new();
        *slot = Some(token.clone());
        Ok(InFlightClaim {
            slot: Arc::clone(self),
            token,
            released: false,
        })
    }

    /// Cancel the claimed request. Returns false when nothing is in flight
    /// or the request has already been released for commit.
    pub fn cancel(&self) -> bool {
        match self.lock().as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }
}

/// Ownership of the in-flight slot. Dropping it without a commit frees the
/// slot, which covers aborted and failed requests.
#[derive(Debug)]
pub struct InFlightClaim {
    slot: Arc<InFlightSlot>,
    token: CancellationToken,
    released: bool,
}

impl InFlightClaim {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Free the slot ahead of committing. Fails with `Cancelled` if a cancel
    /// landed first; after this returns `Ok`, `cancel` can no longer reach
    /// the request.
    pub fn release_for_commit(&mut self) -> ExtractorResult<()> {
        let mut slot = self.slot.lock();
        slot.take();
        self.released = true;
        if self.token.is_cancelled() {
            Err(ExtractorError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Drop for InFlightClaim {
    fn drop(&mut self) {
        if !self.released {
            self.slot.lock().take();
        }
    }
}

/// Per-process session: bounded history plus the current selection.
///
/// All mutation goes through `record`, `select` and `clear_selection`, so
/// callers never touch the fields directly.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    history: Vec<ExtractionRecord>,
    current: Option<CurrentSelection>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a record to history, evict past the capacity and make it the
    /// current selection.
    pub fn record(
        &mut self,
        text: String,
        keywords: Vec<KeywordResult>,
        algorithm: Algorithm,
        timestamp: DateTime<Utc>,
    ) -> &ExtractionRecord {
        let record = ExtractionRecord::new(text, keywords, algorithm, timestamp);
        self.current = Some(CurrentSelection::from(&record));
        self.history.insert(0, record);

        if self.history.len() > HISTORY_CAPACITY {
            let evicted = self.history.split_off(HISTORY_CAPACITY);
            debug!("Evicted {} history record(s)", evicted.len());
        }

        &self.history[0]
    }

    /// Re-hydrate the current selection from a history entry. History order
    /// and contents are left untouched.
    pub fn select(&mut self, index: usize) -> ExtractorResult<ExtractionRecord> {
        let record = self
            .history
            .get(index)
            .cloned()
            .ok_or(ExtractorError::HistoryIndex(index))?;
        self.current = Some(CurrentSelection::from(&record));
        Ok(record)
    }

    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    pub fn history(&self) -> &[ExtractionRecord] {
        &self.history
    }

    pub fn current(&self) -> Option<&CurrentSelection> {
        self.current.as_ref()
    }

    /// Current selection with at least one keyword, or `NoKeywords` naming
    /// the action that needed it.
    pub fn require_keywords(&self, action: &'static str) -> ExtractorResult<&CurrentSelection> {
        self.current
            .as_ref()
            .filter(|selection| !selection.keywords.is_empty())
            .ok_or(ExtractorError::NoKeywords(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(state: &mut SessionState, text: &str) {
        state.record(
            text.to_string(),
            vec![KeywordResult::new(text, 0.9)],
            Algorithm::Tfidf,
            Utc::now(),
        );
    }

    #[test]
    fn newest_first() {
        let mut state = SessionState::new();
        push(&mut state, "first");
        push(&mut state, "second");
        let texts: Vec<&str> = state.history().iter().map(|r| r.source_text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn sixth_record_evicts_the_oldest() {
        let mut state = SessionState::new();
        for i in 1..=5 {
            push(&mut state, &format!("text {i}"));
        }
        assert_eq!(state.history().len(), HISTORY_CAPACITY);

        push(&mut state, "text 6");
        assert_eq!(state.history().len(), HISTORY_CAPACITY);
        assert_eq!(state.history()[0].source_text, "text 6");
        assert!(state.history().iter().all(|r| r.source_text != "text 1"));
        assert_eq!(state.history()[4].source_text, "text 2");
    }

    #[test]
    fn select_rehydrates_without_reordering() {
        let mut state = SessionState::new();
        push(&mut state, "older");
        push(&mut state, "newer");
        let before = state.history().to_vec();

        let picked = state.select(1).unwrap();
        assert_eq!(picked.source_text, "older");
        assert_eq!(state.current().unwrap().source_text, "older");
        assert_eq!(state.history(), before.as_slice());
    }

    #[test]
    fn select_out_of_range_keeps_selection() {
        let mut state = SessionState::new();
        push(&mut state, "only");
        assert_eq!(state.select(3), Err(ExtractorError::HistoryIndex(3)));
        assert_eq!(state.current().unwrap().source_text, "only");
    }

    #[test]
    fn require_keywords_rejects_empty_selection() {
        let mut state = SessionState::new();
        assert_eq!(
            state.require_keywords("copy").unwrap_err(),
            ExtractorError::NoKeywords("copy")
        );

        state.record("x".into(), Vec::new(), Algorithm::Rake, Utc::now());
        assert!(state.require_keywords("export").is_err());
    }

    #[test]
    fn slot_refuses_second_claim_until_released() {
        let slot = Arc::new(InFlightSlot::new());
        let mut claim = slot.claim().unwrap();
        assert_eq!(slot.status(), SessionStatus::Extracting);
        assert_eq!(slot.claim().unwrap_err(), ExtractorError::Busy);

        claim.release_for_commit().unwrap();
        assert_eq!(slot.status(), SessionStatus::Idle);
        assert!(!slot.cancel());
        assert!(slot.claim().is_ok());
    }

    #[test]
    fn dropped_claim_frees_the_slot() {
        let slot = Arc::new(InFlightSlot::new());
        let claim = slot.claim().unwrap();
        drop(claim);
        assert_eq!(slot.status(), SessionStatus::Idle);
        assert!(slot.claim().is_ok());
    }

    #[test]
    fn cancel_before_release_fails_the_commit() {
        let slot = Arc::new(InFlightSlot::new());
        let mut claim = slot.claim().unwrap();
        assert!(slot.cancel());
        assert!(claim.token().is_cancelled());
        assert_eq!(claim.release_for_commit(), Err(ExtractorError::Cancelled));
        assert_eq!(slot.status(), SessionStatus::Idle);
    }
}
