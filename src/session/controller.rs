use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tokio::{sync::Mutex, task::JoinHandle, time};

use crate::{
    error::{ExtractorError, ExtractorResult},
    extraction::{extract_keywords, Algorithm, ExtractionConfig},
    log_error, log_info, log_warn,
    metrics::ExtractionStats,
    models::{CurrentSelection, ExtractionRecord, KeywordResult},
    output::{self, Clipboard, HighlightMarker},
    samples,
};

use super::{
    events::{EventEmitter, SessionEvent},
    state::{InFlightSlot, SessionState, SessionStatus},
};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub text: String,
    pub algorithm: Algorithm,
    pub max_keywords: usize,
}

impl ExtractionRequest {
    pub fn new(text: impl Into<String>, algorithm: Algorithm, max_keywords: usize) -> Self {
        Self {
            text: text.into(),
            algorithm,
            max_keywords,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionOutcome {
    pub record_id: String,
    pub keywords: Vec<KeywordResult>,
    pub stats: ExtractionStats,
}

/// Owns the session and runs extractions against it.
///
/// Cloning is cheap and every clone drives the same session.
#[derive(Clone)]
pub struct ExtractionController {
    state: Arc<Mutex<SessionState>>,
    rng: Arc<Mutex<StdRng>>,
    emitter: Arc<dyn EventEmitter>,
    config: Arc<ExtractionConfig>,
    in_flight: Arc<InFlightSlot>,
}

impl ExtractionController {
    pub fn new(config: ExtractionConfig, emitter: Arc<dyn EventEmitter>) -> Self {
        Self::with_rng(config, emitter, StdRng::from_entropy())
    }

    /// Deterministic scoring for reproducible runs.
    pub fn with_seed(config: ExtractionConfig, emitter: Arc<dyn EventEmitter>, seed: u64) -> Self {
        Self::with_rng(config, emitter, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ExtractionConfig, emitter: Arc<dyn EventEmitter>, rng: StdRng) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::new())),
            rng: Arc::new(Mutex::new(rng)),
            emitter,
            config: Arc::new(config),
            in_flight: Arc::new(InFlightSlot::new()),
        }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn status(&self) -> SessionStatus {
        self.in_flight.status()
    }

    pub async fn history(&self) -> Vec<ExtractionRecord> {
        self.state.lock().await.history().to_vec()
    }

    pub async fn current(&self) -> Option<CurrentSelection> {
        self.state.lock().await.current().cloned()
    }

    /// Run an extraction to completion and wait for its outcome.
    ///
    /// The work happens on a spawned task, so dropping the returned future
    /// does not stop a request that has already been accepted.
    pub async fn extract(&self, request: ExtractionRequest) -> ExtractorResult<ExtractionOutcome> {
        match self.spawn_extract(request).await {
            Ok(result) => result,
            Err(err) => {
                log_error!("Extraction task failed: {err}");
                Err(ExtractorError::Internal(format!(
                    "extraction task failed: {err}"
                )))
            }
        }
    }

    /// Run an extraction on its own task. Aborting the handle releases the
    /// session without recording anything.
    pub fn spawn_extract(
        &self,
        request: ExtractionRequest,
    ) -> JoinHandle<ExtractorResult<ExtractionOutcome>> {
        let controller = self.clone();
        tokio::spawn(async move { controller.run_extraction(request).await })
    }

    /// Abort the in-flight request, if any, before it commits.
    ///
    /// Returns true only when the request will end with `Cancelled`.
    pub fn cancel(&self) -> bool {
        self.in_flight.cancel()
    }

    async fn run_extraction(&self, request: ExtractionRequest) -> ExtractorResult<ExtractionOutcome> {
        if let Err(err) = self.validate(&request) {
            log_warn!("Rejected extraction request: {err}");
            return Err(err);
        }

        // Released on drop, so an aborted or failed request frees the session
        let mut claim = self.in_flight.claim().map_err(|err| {
            log_warn!("Rejected extraction request: {err}");
            err
        })?;
        let started = Instant::now();

        log_info!(
            "Extracting up to {} keywords with {} from {} chars",
            request.max_keywords,
            request.algorithm,
            request.text.len()
        );

        tokio::select! {
            _ = time::sleep(self.config.simulated_delay) => {}
            _ = claim.token().cancelled() => {
                log_warn!("Extraction cancelled before commit");
                return Err(ExtractorError::Cancelled);
            }
        }

        if !request.algorithm.is_recognized() {
            log_warn!(
                "Unrecognized algorithm tag '{}'; all base scores will be zero",
                request.algorithm
            );
        }

        let keywords = {
            let mut rng = self.rng.lock().await;
            extract_keywords(
                &request.text,
                &request.algorithm,
                request.max_keywords,
                &self.config,
                &mut *rng,
            )
        };
        let stats = ExtractionStats::compute(&request.text, &keywords, started.elapsed());

        // Commit history and current selection under a single lock
        let (record_id, history) = {
            let mut state = self.state.lock().await;
            if let Err(err) = claim.release_for_commit() {
                log_warn!("Extraction cancelled before commit");
                return Err(err);
            }
            let record = state.record(
                request.text,
                keywords.clone(),
                request.algorithm,
                Utc::now(),
            );
            let record_id = record.id.clone();
            (record_id, state.history().to_vec())
        };

        log_info!(
            "Extracted {} keywords in {} ms ({} in history)",
            stats.keyword_count,
            stats.processing_time_ms,
            history.len()
        );

        self.emitter
            .emit(&SessionEvent::KeywordsExtracted(keywords.clone()));
        self.emitter.emit(&SessionEvent::StatsUpdated(stats));
        self.emitter.emit(&SessionEvent::HistoryChanged(history));

        Ok(ExtractionOutcome {
            record_id,
            keywords,
            stats,
        })
    }

    fn validate(&self, request: &ExtractionRequest) -> ExtractorResult<()> {
        if request.text.trim().is_empty() {
            return Err(ExtractorError::EmptyInput);
        }
        let range = &self.config.max_keywords_range;
        if !range.contains(&request.max_keywords) {
            return Err(ExtractorError::InvalidMaxKeywords {
                got: request.max_keywords,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(())
    }

    /// Make a history entry the current selection again.
    pub async fn select_history(&self, index: usize) -> ExtractorResult<ExtractionRecord> {
        let record = self.state.lock().await.select(index)?;
        self.emitter
            .emit(&SessionEvent::KeywordsExtracted(record.keywords.clone()));
        Ok(record)
    }

    /// Drop the current selection. History is kept.
    pub async fn clear(&self) {
        self.state.lock().await.clear_selection();
        self.emitter.emit(&SessionEvent::KeywordsExtracted(Vec::new()));
        self.emitter
            .emit(&SessionEvent::StatsUpdated(ExtractionStats::default()));
    }

    pub async fn highlight(&self, marker: &HighlightMarker) -> ExtractorResult<String> {
        let state = self.state.lock().await;
        let selection = state.require_keywords("highlight")?;
        output::highlight(&selection.source_text, &selection.keywords, marker)
            .map_err(|err| ExtractorError::Internal(err.to_string()))
    }

    /// Copy the current keywords and return the payload written.
    pub async fn copy_to_clipboard(&self, clipboard: &dyn Clipboard) -> ExtractorResult<String> {
        let payload = {
            let state = self.state.lock().await;
            output::clipboard_payload(&state.require_keywords("copy")?.keywords)
        };

        clipboard.write_text(&payload).map_err(|err| {
            log_warn!("Clipboard write failed: {err:#}");
            ExtractorError::Clipboard(err.to_string())
        })?;
        Ok(payload)
    }

    pub async fn export_csv(&self) -> ExtractorResult<String> {
        let state = self.state.lock().await;
        Ok(output::to_csv(&state.require_keywords("export")?.keywords))
    }

    /// Write the CSV export into `dir` and return the written path.
    pub async fn export_to_dir(&self, dir: &Path) -> ExtractorResult<PathBuf> {
        let keywords = {
            let state = self.state.lock().await;
            state.require_keywords("export")?.keywords.clone()
        };

        let path = output::write_csv(dir, &keywords).map_err(|err| {
            log_warn!("Export failed: {err:#}");
            ExtractorError::Export(format!("{err:#}"))
        })?;
        log_info!("Exported {} keywords to {}", keywords.len(), path.display());
        Ok(path)
    }

    pub async fn random_sample(&self) -> &'static str {
        let mut rng = self.rng.lock().await;
        samples::random_sample(&mut *rng)
    }
}
