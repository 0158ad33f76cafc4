pub mod error;
pub mod extraction;
pub mod metrics;
pub mod models;
pub mod output;
pub mod samples;
pub mod session;
pub mod settings;
mod utils;

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;

pub use error::{ExtractorError, ExtractorResult};
pub use extraction::{Algorithm, ExtractionConfig};
pub use metrics::ExtractionStats;
pub use models::{CurrentSelection, ExtractionRecord, KeywordResult};
pub use session::{
    commands, ChannelEmitter, EventEmitter, ExtractionController, ExtractionOutcome,
    ExtractionRequest, LogEmitter, SessionEvent,
};
pub use settings::{SettingsStore, UserSettings};
pub use utils::init_logging;

/// Everything the presentation layer needs, shared across commands.
pub struct AppState {
    pub controller: ExtractionController,
    pub settings: SettingsStore,
}

impl AppState {
    /// Build the app state. Settings persist to `settings_path` when given.
    pub fn new(
        config: ExtractionConfig,
        settings_path: Option<PathBuf>,
        emitter: Arc<dyn EventEmitter>,
    ) -> Result<Self> {
        let settings = settings_store(settings_path)?;
        Ok(Self::assemble(ExtractionController::new(config, emitter), settings))
    }

    /// Same as [`AppState::new`] with a seeded random source.
    pub fn with_seed(
        config: ExtractionConfig,
        settings_path: Option<PathBuf>,
        emitter: Arc<dyn EventEmitter>,
        seed: u64,
    ) -> Result<Self> {
        let settings = settings_store(settings_path)?;
        Ok(Self::assemble(
            ExtractionController::with_seed(config, emitter, seed),
            settings,
        ))
    }

    fn assemble(controller: ExtractionController, settings: SettingsStore) -> Self {
        log::info!(
            "Keyword simulator ready (delay {} ms)",
            controller.config().simulated_delay.as_millis()
        );
        Self {
            controller,
            settings,
        }
    }
}

fn settings_store(path: Option<PathBuf>) -> Result<SettingsStore> {
    match path {
        Some(path) => SettingsStore::new(path),
        None => Ok(SettingsStore::in_memory()),
    }
}
