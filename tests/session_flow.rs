use std::{sync::Arc, time::Duration};

use keyword_sim::{
    commands,
    output::{parse_csv, MemoryClipboard},
    session::HISTORY_CAPACITY,
    AppState, ChannelEmitter, ExtractionConfig, SessionEvent, UserSettings,
};

fn app() -> (AppState, tokio::sync::mpsc::UnboundedReceiver<SessionEvent>) {
    let (emitter, rx) = ChannelEmitter::new();
    let config = ExtractionConfig::default().with_delay(Duration::from_millis(1));
    let state = AppState::with_seed(config, None, Arc::new(emitter), 99).unwrap();
    (state, rx)
}

#[tokio::test]
async fn sixth_extraction_evicts_the_first() {
    let (state, _rx) = app();
    let texts: Vec<String> = (1..=6)
        .map(|i| format!("extraction number {i} about distributed systems"))
        .collect();

    for text in &texts {
        commands::extract_keywords(&state, text.clone(), Some("tfidf".into()), Some(5))
            .await
            .unwrap();
    }

    let history = commands::get_history(&state).await.unwrap();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history[0].source_text, texts[5]);
    assert!(history.iter().all(|r| r.source_text != texts[0]));
}

#[tokio::test]
async fn empty_input_creates_no_history() {
    let (state, _rx) = app();
    commands::extract_keywords(&state, "kernel scheduler".into(), None, None)
        .await
        .unwrap();

    let err = commands::extract_keywords(&state, "".into(), None, None)
        .await
        .unwrap_err();
    assert_eq!(err, "Please enter some text to extract keywords.");
    assert_eq!(commands::get_history(&state).await.unwrap().len(), 1);
}

#[tokio::test]
async fn export_round_trips_current_keywords() {
    let (state, _rx) = app();
    let text = keyword_sim::samples::SAMPLE_TEXTS[1];
    let outcome = commands::extract_keywords(&state, text.into(), Some("yake".into()), Some(8))
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = commands::export_keywords(&state, dir.path().to_path_buf())
        .await
        .unwrap();
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.starts_with("Keyword,Score\n"));

    let parsed = parse_csv(&contents).unwrap();
    assert_eq!(parsed.len(), outcome.keywords.len());
    for (expected, read) in outcome.keywords.iter().zip(&parsed) {
        assert_eq!(expected.keyword, read.keyword);
        assert_eq!(format!("{:.4}", expected.score), format!("{:.4}", read.score));
    }
}

#[tokio::test]
async fn selecting_history_drives_copy_and_highlight() {
    let (state, _rx) = app();
    commands::extract_keywords(
        &state,
        "Compilers parse tokens. Compilers emit code.".into(),
        Some("textrank".into()),
        Some(3),
    )
    .await
    .unwrap();
    commands::extract_keywords(
        &state,
        "Databases index rows and databases cache pages.".into(),
        Some("rake".into()),
        Some(3),
    )
    .await
    .unwrap();

    let record = commands::select_history_item(&state, 1).await.unwrap();
    assert!(record.source_text.starts_with("Compilers"));

    let clipboard = MemoryClipboard::new();
    let payload = commands::copy_keywords(&state, &clipboard).await.unwrap();
    let expected: Vec<&str> = record.keywords.iter().map(|k| k.keyword.as_str()).collect();
    assert_eq!(payload, expected.join(", "));
    assert_eq!(clipboard.contents().as_deref(), Some(payload.as_str()));

    let highlighted = commands::highlight_keywords(&state, None).await.unwrap();
    assert!(highlighted.contains("<mark>"));
    assert!(!highlighted.contains("Databases"));

    assert!(commands::select_history_item(&state, 7).await.is_err());
}

#[tokio::test]
async fn unrecognized_tag_still_records() {
    let (state, _rx) = app();
    let outcome = commands::extract_keywords(
        &state,
        "vectors tensors matrices scalars".into(),
        Some("bm25".into()),
        Some(4),
    )
    .await
    .unwrap();

    assert!(outcome.keywords.iter().all(|k| k.score <= 0.10 + 1e-12));
    let history = commands::get_history(&state).await.unwrap();
    assert_eq!(history[0].algorithm.as_str(), "bm25");
}

#[tokio::test]
async fn settings_supply_defaults() {
    let (state, _rx) = app();
    commands::update_settings(
        &state,
        UserSettings {
            default_algorithm: keyword_sim::Algorithm::Textrank,
            default_max_keywords: 3,
        },
    )
    .unwrap();

    let outcome = commands::extract_keywords(
        &state,
        "alpha beta gamma delta epsilon zeta eta theta".into(),
        None,
        None,
    )
    .await
    .unwrap();
    assert!(outcome.keywords.len() <= 3);
    assert!(outcome.keywords.iter().all(|k| k.score >= 0.80));
    assert_eq!(
        commands::get_settings(&state).unwrap().default_max_keywords,
        3
    );
}

#[tokio::test]
async fn sample_text_is_extractable() {
    let (state, mut rx) = app();
    let sample = commands::load_sample(&state).await.unwrap();
    assert!(keyword_sim::samples::SAMPLE_TEXTS.contains(&sample.as_str()));

    commands::extract_keywords(&state, sample, None, None).await.unwrap();
    let mut names = Vec::new();
    while let Ok(event) = rx.try_recv() {
        names.push(event.name());
    }
    assert_eq!(
        names,
        vec!["keywords-extracted", "stats-updated", "history-changed"]
    );

    commands::clear_results(&state).await.unwrap();
    assert!(commands::copy_keywords(&state, &MemoryClipboard::new())
        .await
        .is_err());
    assert!(!commands::cancel_extraction(&state).await.unwrap());
}

#[tokio::test]
async fn seeded_state_reloads_settings_and_repeats_scores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let config = || ExtractionConfig::default().with_delay(Duration::from_millis(1));
    let seeded = |seed| {
        AppState::with_seed(config(), Some(path.clone()), Arc::new(ChannelEmitter::new().0), seed)
            .unwrap()
    };

    let first = seeded(7);
    commands::update_settings(
        &first,
        UserSettings {
            default_algorithm: keyword_sim::Algorithm::Rake,
            default_max_keywords: 4,
        },
    )
    .unwrap();

    let second = seeded(7);
    assert_eq!(
        commands::get_settings(&second).unwrap(),
        commands::get_settings(&first).unwrap()
    );

    let text = keyword_sim::samples::SAMPLE_TEXTS[0];
    let a = commands::extract_keywords(&first, text.into(), None, None).await.unwrap();
    let b = commands::extract_keywords(&second, text.into(), None, None).await.unwrap();
    assert_eq!(a.keywords, b.keywords);
    assert_eq!(first.controller.config().max_keywords_range, 3..=20);
}
