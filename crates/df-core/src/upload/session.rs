//! Upload page state

use super::{map_prediction, HealthResponse, PredictionResponse, PredictionService, UploadError, UploadResult};
use crate::config::AppConfig;
use crate::media::{SelectedFile, Selection};
use crate::navigation::ResultsPayload;
use chrono::{DateTime, Utc};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Analyzing,
}

/// Reachability of the inference service, as reported by `/health`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Online {
        device: Option<String>,
        model_loaded: bool,
    },
    Offline,
}

impl ServiceStatus {
    pub fn from_health(result: &UploadResult<HealthResponse>) -> Self {
        match result {
            Ok(health) => ServiceStatus::Online {
                device: health.device.clone(),
                model_loaded: health.model_loaded,
            },
            Err(_) => ServiceStatus::Offline,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ServiceStatus::Unknown => "Checking detection service...".to_string(),
            ServiceStatus::Online {
                model_loaded: false,
                ..
            } => "Detection service online, model not loaded".to_string(),
            ServiceStatus::Online {
                device: Some(device),
                ..
            } => format!("Detection service online ({})", device),
            ServiceStatus::Online { .. } => "Detection service online".to_string(),
            ServiceStatus::Offline => "Detection service unreachable".to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(
            self,
            ServiceStatus::Online {
                model_loaded: true,
                ..
            }
        )
    }
}

/// Where the page goes after an upload attempt
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Navigate(ResultsPayload),
    Alert(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadSession {
    pub selection: Selection,
    pub phase: UploadPhase,
    /// Percentage shown under the drop zone
    pub upload_progress: f64,
    pub auto_delete: bool,
    pub service_status: ServiceStatus,
}

impl UploadSession {
    pub fn new(max_files: usize) -> Self {
        Self {
            selection: Selection::new(max_files),
            phase: UploadPhase::Idle,
            upload_progress: 0.0,
            auto_delete: true,
            service_status: ServiceStatus::Unknown,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_files)
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == UploadPhase::Analyzing
    }

    pub fn is_busy(&self) -> bool {
        self.phase != UploadPhase::Idle
    }

    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty() && !self.is_busy()
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            UploadPhase::Uploading => "Uploading...",
            UploadPhase::Analyzing => "Analyzing...",
            UploadPhase::Idle => "Start Analysis",
        }
    }

    pub fn input_disabled(&self) -> bool {
        self.selection.input_disabled(self.is_busy())
    }

    pub fn add_files(&mut self, files: Vec<SelectedFile>) -> usize {
        if self.is_busy() {
            return 0;
        }
        self.selection.extend(files)
    }

    pub fn remove_file(&mut self, index: usize) -> Option<SelectedFile> {
        self.selection.remove(index)
    }

    pub fn clear(&mut self) {
        self.selection.clear();
        self.upload_progress = 0.0;
    }

    pub fn toggle_auto_delete(&mut self) {
        self.auto_delete = !self.auto_delete;
    }

    /// Claim the first file for submission. `None` while busy or empty.
    pub fn begin(&mut self) -> Option<SelectedFile> {
        if !self.can_submit() {
            return None;
        }
        let file = self.selection.first()?.clone();
        self.phase = UploadPhase::Uploading;
        self.upload_progress = 30.0;
        Some(file)
    }

    pub fn record_response(&mut self) {
        self.phase = UploadPhase::Analyzing;
        self.upload_progress = 70.0;
    }

    pub fn complete(
        &mut self,
        file: SelectedFile,
        response: &PredictionResponse,
        now: DateTime<Utc>,
    ) -> ResultsPayload {
        let result = map_prediction(&file, response, now);
        self.upload_progress = 100.0;
        self.phase = UploadPhase::Idle;
        info!("Analysis of {} finished: confidence {}", result.file_name, result.confidence);

        ResultsPayload {
            files: vec![file],
            results: vec![result],
        }
    }

    /// Back to an interactive state; returns the alert text
    pub fn fail(&mut self, err: &UploadError) -> String {
        error!("Upload failed: {}", err);
        self.phase = UploadPhase::Idle;
        self.upload_progress = 0.0;
        err.alert_message()
    }
}

/// Submit the first selected file and decide where the page goes next.
/// Returns `None` when there was nothing to submit or an upload is in flight.
pub async fn run_upload<S>(
    session: &mut UploadSession,
    service: &S,
    now: DateTime<Utc>,
) -> Option<UploadOutcome>
where
    S: PredictionService + ?Sized,
{
    let file = session.begin()?;

    let outcome = match service.predict(&file).await {
        Ok(response) => {
            session.record_response();
            UploadOutcome::Navigate(session.complete(file, &response, now))
        }
        Err(err) => UploadOutcome::Alert(session.fail(&err)),
    };
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::FileMeta;

    fn video(name: &str) -> SelectedFile {
        SelectedFile::from_bytes(
            FileMeta {
                name: name.to_string(),
                size: 2048,
                mime: "video/mp4".to_string(),
            },
            vec![0; 8],
        )
    }

    #[test]
    fn test_begin_claims_first_file() {
        let mut session = UploadSession::new(5);
        assert!(session.begin().is_none());

        session.add_files(vec![video("a.mp4"), video("b.mp4")]);
        let file = session.begin().unwrap();
        assert_eq!(file.name, "a.mp4");
        assert!(session.is_uploading());
        assert_eq!(session.upload_progress, 30.0);
        assert_eq!(session.button_label(), "Uploading...");
        assert!(session.input_disabled());

        // mutual exclusion while in flight
        assert!(session.begin().is_none());
        assert_eq!(session.add_files(vec![video("c.mp4")]), 0);
    }

    #[test]
    fn test_complete_builds_payload() {
        let mut session = UploadSession::new(5);
        session.add_files(vec![video("a.mp4")]);
        let file = session.begin().unwrap();
        session.record_response();
        assert_eq!(session.button_label(), "Analyzing...");
        assert_eq!(session.upload_progress, 70.0);

        let response = PredictionResponse {
            confidence: Some(0.5),
            is_fake: Some(true),
            ..Default::default()
        };
        let payload = session.complete(file, &response, Utc::now());
        assert_eq!(payload.files.len(), 1);
        assert_eq!(payload.results[0].confidence, 50);
        assert_eq!(session.phase, UploadPhase::Idle);
        assert_eq!(session.upload_progress, 100.0);
        assert_eq!(session.button_label(), "Start Analysis");
    }

    #[test]
    fn test_fail_resets_state() {
        let mut session = UploadSession::new(5);
        session.add_files(vec![video("a.mp4")]);
        session.begin().unwrap();

        let message = session.fail(&UploadError::Network("connection refused".to_string()));
        assert_eq!(message, "Network error: connection refused");
        assert!(!session.is_busy());
        assert_eq!(session.upload_progress, 0.0);
        assert!(session.can_submit());
        assert_eq!(session.selection.len(), 1);
    }

    #[test]
    fn test_auto_delete_defaults_on() {
        let mut session = UploadSession::new(5);
        assert!(session.auto_delete);
        session.toggle_auto_delete();
        assert!(!session.auto_delete);
    }

    #[test]
    fn test_service_status() {
        let online = ServiceStatus::from_health(&Ok(HealthResponse {
            status: "healthy".to_string(),
            model_loaded: true,
            device: Some("cuda".to_string()),
        }));
        assert!(online.is_ready());
        assert_eq!(online.label(), "Detection service online (cuda)");

        let offline = ServiceStatus::from_health(&Err(UploadError::Network("refused".to_string())));
        assert_eq!(offline, ServiceStatus::Offline);
        assert!(!ServiceStatus::Unknown.is_ready());
    }
}
