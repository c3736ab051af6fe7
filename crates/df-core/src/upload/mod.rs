//! Upload orchestration
//!
//! Only the first selected file is ever submitted. The service answers with a
//! [`PredictionResponse`], which [`map_prediction`] turns into the
//! [`AnalysisResult`] the results page renders.

mod client;
mod session;

pub use client::HttpPredictionClient;
pub use session::{run_upload, ServiceStatus, UploadOutcome, UploadPhase, UploadSession};

use crate::media::SelectedFile;
use crate::model::{AnalysisResult, MediaType, SubScores, SuspiciousArea, SuspiciousFrame};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    /// The service answered with a non-2xx status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Cannot upload '{url}': links are not fetched, select the file itself")]
    UrlSource { url: String },

    #[error("No file selected")]
    EmptySelection,
}

pub type UploadResult<T> = Result<T, UploadError>;

impl UploadError {
    /// Text for the blocking alert shown on the upload page
    pub fn alert_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            "Upload failed".to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            UploadError::Decode(err.to_string())
        } else {
            UploadError::Network(err.to_string())
        }
    }
}

/// Body of a successful `POST /predict`
///
/// Every field is optional, and a missing or mistyped value reads as `None`,
/// so an unexpected shape degrades to defaults instead of failing the upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionResponse {
    #[serde(deserialize_with = "lenient")]
    pub video_name: Option<String>,
    /// `FAKE` or `REAL`
    #[serde(deserialize_with = "lenient")]
    pub prediction: Option<String>,
    /// Fraction in 0..=1
    #[serde(deserialize_with = "lenient")]
    pub confidence: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub is_fake: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub frames_analyzed: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub raw_score: Option<f64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Body of `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub device: Option<String>,
}

/// Error body of a failed request. The inference service reports through
/// `detail`; older deployments used `error`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub detail: Option<serde_json::Value>,
}

/// Message for a non-2xx answer: `error`, then a string `detail`, then the status
pub fn error_message(status: u16, body: &[u8]) -> String {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();

    if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
        return error;
    }
    if let Some(serde_json::Value::String(detail)) = parsed.detail {
        if !detail.is_empty() {
            return detail;
        }
    }
    format!("Upload failed with status {}", status)
}

/// Seam between the upload page and the inference service
#[async_trait(?Send)]
pub trait PredictionService {
    /// Submit one file as multipart field `file`
    async fn predict(&self, file: &SelectedFile) -> UploadResult<PredictionResponse>;

    async fn health(&self) -> UploadResult<HealthResponse>;
}

/// Build the view model for one prediction. Sub-scores, areas and frames are
/// placeholders since the service only reports the overall verdict.
pub fn map_prediction(
    file: &SelectedFile,
    response: &PredictionResponse,
    now: DateTime<Utc>,
) -> AnalysisResult {
    let is_video_mime = file.mime.starts_with("video/");
    let confidence = (response.confidence.unwrap_or(0.0) * 100.0)
        .round()
        .clamp(0.0, 100.0) as u8;

    AnalysisResult {
        id: now.timestamp_millis().to_string(),
        file_name: response
            .video_name
            .clone()
            .unwrap_or_else(|| file.name.clone()),
        media_type: MediaType::from_mime(&file.mime),
        is_real: !response.is_fake.unwrap_or(false),
        confidence,
        analysis: SubScores {
            facial_consistency: 80,
            lighting_analysis: 78,
            temporal_consistency: is_video_mime.then_some(74),
            texture_analysis: 82,
            metadata_check: 90,
        },
        suspicious_areas: vec![SuspiciousArea {
            x: 120.0,
            y: 140.0,
            width: 40.0,
            height: 40.0,
            confidence: 0.7,
        }],
        suspicious_frames: if is_video_mime {
            vec![SuspiciousFrame {
                timestamp: 2.5,
                confidence: 0.72,
            }]
        } else {
            Vec::new()
        },
        explanations: Vec::new(),
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::FileMeta;
    use chrono::TimeZone;

    fn upload(name: &str, mime: &str) -> SelectedFile {
        SelectedFile::from_bytes(
            FileMeta {
                name: name.to_string(),
                size: 3,
                mime: mime.to_string(),
            },
            vec![1, 2, 3],
        )
    }

    #[test]
    fn test_maps_fake_prediction() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        let response = PredictionResponse {
            video_name: Some("a.mp4".to_string()),
            prediction: Some("FAKE".to_string()),
            confidence: Some(0.87),
            is_fake: Some(true),
            ..Default::default()
        };

        let result = map_prediction(&upload("local.mp4", "video/mp4"), &response, now);
        assert!(!result.is_real);
        assert_eq!(result.confidence, 87);
        assert_eq!(result.file_name, "a.mp4");
        assert_eq!(result.media_type, MediaType::Video);
        assert_eq!(result.id, now.timestamp_millis().to_string());
        assert_eq!(result.analysis.temporal_consistency, Some(74));
        assert_eq!(result.suspicious_frames.len(), 1);
        assert_eq!(result.suspicious_areas.len(), 1);
        assert!(result.explanations.is_empty());
    }

    #[test]
    fn test_maps_image_without_frames() {
        let response = PredictionResponse {
            confidence: Some(0.123),
            is_fake: Some(false),
            ..Default::default()
        };

        let result = map_prediction(&upload("face.png", "image/png"), &response, Utc::now());
        assert!(result.is_real);
        assert_eq!(result.confidence, 12);
        assert_eq!(result.file_name, "face.png");
        assert_eq!(result.media_type, MediaType::Image);
        assert_eq!(result.analysis.temporal_consistency, None);
        assert!(result.suspicious_frames.is_empty());
    }

    #[test]
    fn test_malformed_body_degrades() {
        let response: PredictionResponse = serde_json::from_str(r#"{"unexpected": 1}"#).unwrap();
        let result = map_prediction(&upload("x.mp4", "video/mp4"), &response, Utc::now());
        assert_eq!(result.confidence, 0);
        assert!(result.is_real);

        let out_of_range = PredictionResponse {
            confidence: Some(3.5),
            ..Default::default()
        };
        let result = map_prediction(&upload("x.mp4", "video/mp4"), &out_of_range, Utc::now());
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_mistyped_field_degrades() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"is_fake": true, "confidence": 0.9, "frames_analyzed": 12.5}"#).unwrap();
        assert_eq!(response.frames_analyzed, None);
        let result = map_prediction(&upload("x.mp4", "video/mp4"), &response, Utc::now());
        assert!(!result.is_real);
        assert_eq!(result.confidence, 90);

        let response: PredictionResponse = serde_json::from_str(r#"{"confidence": "0.9", "is_fake": "yes"}"#).unwrap();
        assert_eq!(response.confidence, None);
        assert_eq!(response.is_fake, None);
        let result = map_prediction(&upload("x.mp4", "video/mp4"), &response, Utc::now());
        assert_eq!(result.confidence, 0);
        assert!(result.is_real);
    }

    #[test]
    fn test_error_message_resolution() {
        assert_eq!(error_message(400, br#"{"error": "bad file"}"#), "bad file");
        assert_eq!(
            error_message(400, br#"{"detail": "Unsupported video format"}"#),
            "Unsupported video format"
        );
        assert_eq!(
            error_message(422, br#"{"detail": [{"loc": ["body", "file"]}]}"#),
            "Upload failed with status 422"
        );
        assert_eq!(error_message(502, b"<html>gateway</html>"), "Upload failed with status 502");
        assert_eq!(error_message(500, b""), "Upload failed with status 500");
    }

    #[test]
    fn test_alert_message() {
        let err = UploadError::Rejected {
            status: 400,
            message: "bad file".to_string(),
        };
        assert_eq!(err.alert_message(), "bad file");
        assert_eq!(UploadError::EmptySelection.alert_message(), "No file selected");
    }
}
