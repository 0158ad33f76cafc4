use std::path::PathBuf;

use crate::{
    extraction::Algorithm,
    models::ExtractionRecord,
    output::{Clipboard, HighlightMarker},
    session::{ExtractionController, ExtractionOutcome, ExtractionRequest},
    settings::UserSettings,
    AppState,
};

fn controller_from_state(state: &AppState) -> ExtractionController {
    state.controller.clone()
}

pub async fn extract_keywords(
    state: &AppState,
    text: String,
    algorithm: Option<String>,
    max_keywords: Option<usize>,
) -> Result<ExtractionOutcome, String> {
    let defaults = state.settings.get();
    let request = ExtractionRequest::new(
        text,
        algorithm
            .map(|tag| Algorithm::parse(&tag))
            .unwrap_or(defaults.default_algorithm),
        max_keywords.unwrap_or(defaults.default_max_keywords),
    );

    let controller = controller_from_state(state);
    controller.extract(request).await.map_err(|e| e.to_string())
}

pub async fn cancel_extraction(state: &AppState) -> Result<bool, String> {
    let controller = controller_from_state(state);
    Ok(controller.cancel())
}

pub async fn get_history(state: &AppState) -> Result<Vec<ExtractionRecord>, String> {
    let controller = controller_from_state(state);
    Ok(controller.history().await)
}

pub async fn select_history_item(
    state: &AppState,
    index: usize,
) -> Result<ExtractionRecord, String> {
    let controller = controller_from_state(state);
    controller
        .select_history(index)
        .await
        .map_err(|e| e.to_string())
}

pub async fn highlight_keywords(
    state: &AppState,
    marker: Option<HighlightMarker>,
) -> Result<String, String> {
    let controller = controller_from_state(state);
    controller
        .highlight(&marker.unwrap_or_default())
        .await
        .map_err(|e| e.to_string())
}

pub async fn copy_keywords(state: &AppState, clipboard: &dyn Clipboard) -> Result<String, String> {
    let controller = controller_from_state(state);
    controller
        .copy_to_clipboard(clipboard)
        .await
        .map_err(|e| e.to_string())
}

pub async fn export_keywords(state: &AppState, dir: PathBuf) -> Result<PathBuf, String> {
    let controller = controller_from_state(state);
    controller
        .export_to_dir(&dir)
        .await
        .map_err(|e| e.to_string())
}

pub async fn load_sample(state: &AppState) -> Result<String, String> {
    let controller = controller_from_state(state);
    Ok(controller.random_sample().await.to_string())
}

pub async fn clear_results(state: &AppState) -> Result<(), String> {
    let controller = controller_from_state(state);
    controller.clear().await;
    Ok(())
}

pub fn get_settings(state: &AppState) -> Result<UserSettings, String> {
    Ok(state.settings.get())
}

pub fn update_settings(state: &AppState, settings: UserSettings) -> Result<(), String> {
    state.settings.update(settings).map_err(|e| e.to_string())
}
