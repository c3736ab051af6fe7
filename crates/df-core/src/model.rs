//! Analysis result view model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media that was analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Anything that is not declared as an image is treated as video
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaType::Image
        } else {
            MediaType::Video
        }
    }

    pub fn is_video(self) -> bool {
        matches!(self, MediaType::Video)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
        }
    }
}

/// Named sub-scores, integer percentages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub facial_consistency: u8,
    pub lighting_analysis: u8,
    /// Only meaningful for video
    pub temporal_consistency: Option<u8>,
    pub texture_analysis: u8,
    pub metadata_check: u8,
}

/// Pixel-space region flagged as likely manipulated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fraction in 0..=1
    pub confidence: f64,
}

impl SuspiciousArea {
    /// Badge text above the overlay rectangle
    pub fn label(&self) -> String {
        format!("{}%", (self.confidence * 100.0).round() as i64)
    }

    /// Absolute positioning for the overlay rectangle
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Video timestamp flagged as likely manipulated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousFrame {
    /// Seconds from the start of the video
    pub timestamp: f64,
    /// Fraction in 0..=1
    pub confidence: f64,
}

impl SuspiciousFrame {
    pub fn label(&self) -> String {
        format!("{}%", (self.confidence * 100.0).round() as i64)
    }
}

/// Client-side view model built from one prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: String,
    pub file_name: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub is_real: bool,
    /// Integer percentage in 0..=100
    pub confidence: u8,
    pub analysis: SubScores,
    pub suspicious_areas: Vec<SuspiciousArea>,
    pub suspicious_frames: Vec<SuspiciousFrame>,
    pub explanations: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Hardcoded result shown when the results page is opened without data
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self {
            id: "result-1".to_string(),
            file_name: "sample-video.mp4".to_string(),
            media_type: MediaType::Video,
            is_real: false,
            confidence: 87,
            analysis: SubScores {
                facial_consistency: 65,
                lighting_analysis: 72,
                temporal_consistency: Some(58),
                texture_analysis: 81,
                metadata_check: 95,
            },
            suspicious_areas: vec![
                SuspiciousArea { x: 100.0, y: 150.0, width: 50.0, height: 50.0, confidence: 0.8 },
                SuspiciousArea { x: 200.0, y: 200.0, width: 30.0, height: 30.0, confidence: 0.6 },
            ],
            suspicious_frames: vec![
                SuspiciousFrame { timestamp: 2.5, confidence: 0.85 },
                SuspiciousFrame { timestamp: 5.2, confidence: 0.72 },
                SuspiciousFrame { timestamp: 8.1, confidence: 0.91 },
            ],
            explanations: vec![
                "Inconsistent eye movement patterns detected".to_string(),
                "Unnatural lip-sync timing in multiple frames".to_string(),
                "Slight lighting inconsistencies in facial regions".to_string(),
                "Temporal artifacts in background elements".to_string(),
            ],
            timestamp: now,
        }
    }

    /// Stand-in when the selected index points past the result list
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            id: "empty".to_string(),
            file_name: "unknown".to_string(),
            media_type: MediaType::Video,
            is_real: true,
            confidence: 0,
            analysis: SubScores::default(),
            suspicious_areas: Vec::new(),
            suspicious_frames: Vec::new(),
            explanations: Vec::new(),
            timestamp: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_mime() {
        assert_eq!(MediaType::from_mime("image/png"), MediaType::Image);
        assert_eq!(MediaType::from_mime("video/mp4"), MediaType::Video);
        assert_eq!(MediaType::from_mime(""), MediaType::Video);
        assert_eq!(MediaType::from_mime("url"), MediaType::Video);
    }

    #[test]
    fn test_serializes_with_navigation_field_names() {
        let result = AnalysisResult::sample(Utc::now());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fileName"], "sample-video.mp4");
        assert_eq!(json["type"], "video");
        assert_eq!(json["isReal"], false);
        assert_eq!(json["analysis"]["temporalConsistency"], 58);
        assert_eq!(json["suspiciousFrames"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_area_label_and_style() {
        let area = SuspiciousArea { x: 120.0, y: 140.0, width: 40.0, height: 40.0, confidence: 0.7 };
        assert_eq!(area.label(), "70%");
        assert_eq!(area.style(), "left: 120px; top: 140px; width: 40px; height: 40px;");
    }
}
