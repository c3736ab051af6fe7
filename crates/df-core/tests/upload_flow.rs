//! Upload orchestration driven through a scripted prediction service

use async_trait::async_trait;
use chrono::Utc;
use df_core::media::FileMeta;
use df_core::upload::{
    run_upload, HealthResponse, PredictionResponse, PredictionService, UploadError, UploadOutcome,
    UploadResult, UploadSession,
};
use df_core::{ResultsView, SelectedFile, Verdict, VerdictPolicy};
use std::cell::RefCell;

/// Returns a fixed answer and records which files it was asked about
struct ScriptedService {
    answer: UploadResult<PredictionResponse>,
    seen: RefCell<Vec<String>>,
}

impl ScriptedService {
    fn new(answer: UploadResult<PredictionResponse>) -> Self {
        Self {
            answer,
            seen: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl PredictionService for ScriptedService {
    async fn predict(&self, file: &SelectedFile) -> UploadResult<PredictionResponse> {
        self.seen.borrow_mut().push(file.name.clone());
        self.answer.clone()
    }

    async fn health(&self) -> UploadResult<HealthResponse> {
        Ok(HealthResponse::default())
    }
}

fn file(name: &str, mime: &str) -> SelectedFile {
    SelectedFile::from_bytes(
        FileMeta {
            name: name.to_string(),
            size: 16,
            mime: mime.to_string(),
        },
        vec![7; 16],
    )
}

#[tokio::test]
async fn test_only_first_file_is_submitted() {
    let service = ScriptedService::new(Ok(PredictionResponse {
        video_name: Some("a.mp4".to_string()),
        confidence: Some(0.87),
        is_fake: Some(true),
        ..Default::default()
    }));
    let mut session = UploadSession::new(5);
    session.add_files(vec![file("a.mp4", "video/mp4"), file("b.png", "image/png")]);

    let outcome = run_upload(&mut session, &service, Utc::now()).await;

    assert_eq!(*service.seen.borrow(), vec!["a.mp4".to_string()]);
    let payload = match outcome {
        Some(UploadOutcome::Navigate(payload)) => payload,
        other => panic!("expected navigation, got {:?}", other),
    };
    assert_eq!(payload.files.len(), 1);
    assert_eq!(payload.files[0].name, "a.mp4");
    assert_eq!(payload.results.len(), 1);
    assert!(!payload.results[0].is_real);
    assert_eq!(payload.results[0].confidence, 87);
    assert!(!session.is_busy());
}

#[tokio::test]
async fn test_rejection_alerts_without_navigating() {
    let service = ScriptedService::new(Err(UploadError::Rejected {
        status: 400,
        message: "bad file".to_string(),
    }));
    let mut session = UploadSession::new(5);
    session.add_files(vec![file("a.mp4", "video/mp4")]);

    let outcome = run_upload(&mut session, &service, Utc::now()).await;

    assert_eq!(outcome, Some(UploadOutcome::Alert("bad file".to_string())));
    assert!(!session.is_uploading());
    assert!(!session.is_analyzing());
    assert!(session.can_submit());
}

#[tokio::test]
async fn test_empty_selection_does_nothing() {
    let service = ScriptedService::new(Ok(PredictionResponse::default()));
    let mut session = UploadSession::new(5);

    assert!(run_upload(&mut session, &service, Utc::now()).await.is_none());
    assert!(service.seen.borrow().is_empty());
}

#[tokio::test]
async fn test_results_page_applies_literal_threshold() {
    // stored flag says real, threshold says fake
    let service = ScriptedService::new(Ok(PredictionResponse {
        confidence: Some(0.42),
        is_fake: Some(false),
        ..Default::default()
    }));
    let mut session = UploadSession::new(5);
    session.add_files(vec![file("face.png", "image/png")]);

    let payload = match run_upload(&mut session, &service, Utc::now()).await {
        Some(UploadOutcome::Navigate(payload)) => payload,
        other => panic!("expected navigation, got {:?}", other),
    };
    assert!(payload.results[0].is_real);

    let view = ResultsView::new(Some(payload.clone()), VerdictPolicy::default(), Utc::now());
    assert_eq!(view.verdict(), Verdict::Fake);

    let view = ResultsView::new(Some(payload), VerdictPolicy::StoredFlag, Utc::now());
    assert_eq!(view.verdict(), Verdict::Real);
}
