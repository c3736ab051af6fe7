//! Results page
//!
//! Every tab is a pure function of the selected [`AnalysisResult`]. The page
//! only keeps which result and which tab are selected.

mod verdict;

pub use verdict::{Verdict, VerdictPolicy, VerdictTone};

use crate::model::{AnalysisResult, SuspiciousFrame};
use crate::navigation::ResultsPayload;
use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use std::borrow::Cow;

/// Shown instead of the player for images
pub const TIMELINE_UNAVAILABLE: &str = "Timeline analysis is only available for video files.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResultTab {
    #[default]
    Overview,
    Heatmap,
    Timeline,
    Metadata,
    Explainability,
}

impl ResultTab {
    pub const ALL: [ResultTab; 5] = [
        ResultTab::Overview,
        ResultTab::Heatmap,
        ResultTab::Timeline,
        ResultTab::Metadata,
        ResultTab::Explainability,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResultTab::Overview => "Overview",
            ResultTab::Heatmap => "Heatmap",
            ResultTab::Timeline => "Timeline",
            ResultTab::Metadata => "Metadata",
            ResultTab::Explainability => "Explainability",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Selection state of the results page
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    payload: ResultsPayload,
    selected: usize,
    active_tab: ResultTab,
    policy: VerdictPolicy,
    resolved_at: DateTime<Utc>,
}

impl ResultsView {
    /// Resolve the incoming navigation state; see [`ResultsPayload::resolve`]
    pub fn new(payload: Option<ResultsPayload>, policy: VerdictPolicy, now: DateTime<Utc>) -> Self {
        Self {
            payload: ResultsPayload::resolve(payload, now),
            selected: 0,
            active_tab: ResultTab::default(),
            policy,
            resolved_at: now,
        }
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.payload.results
    }

    pub fn payload(&self) -> &ResultsPayload {
        &self.payload
    }

    pub fn policy(&self) -> VerdictPolicy {
        self.policy
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn active_tab(&self) -> ResultTab {
        self.active_tab
    }

    /// Out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.payload.results.len() {
            self.selected = index;
        }
    }

    pub fn set_tab(&mut self, tab: ResultTab) {
        self.active_tab = tab;
    }

    pub fn current(&self) -> Cow<'_, AnalysisResult> {
        match self.payload.results.get(self.selected) {
            Some(result) => Cow::Borrowed(result),
            None => Cow::Owned(AnalysisResult::placeholder(self.resolved_at)),
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.policy.verdict(&self.current())
    }

    /// Subtitle under the page heading
    pub fn summary_line(&self, completed_at: NaiveTime) -> String {
        let count = self.payload.results.len();
        format!(
            "{} file{} analyzed • Completed {}",
            count,
            if count == 1 { "" } else { "s" },
            completed_at.format("%H:%M:%S")
        )
    }
}

/// A labelled sub-score in the analysis breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub label: &'static str,
    pub score: u8,
}

pub fn overview_scores(result: &AnalysisResult) -> Vec<ScoreRow> {
    let scores = &result.analysis;
    let mut rows = vec![
        ScoreRow { label: "Facial Consistency", score: scores.facial_consistency },
        ScoreRow { label: "Lighting Analysis", score: scores.lighting_analysis },
    ];
    if let Some(temporal) = scores.temporal_consistency {
        rows.push(ScoreRow { label: "Temporal Consistency", score: temporal });
    }
    rows.push(ScoreRow { label: "Texture Analysis", score: scores.texture_analysis });
    rows.push(ScoreRow { label: "Metadata Check", score: scores.metadata_check });
    rows
}

#[derive(Debug, Clone, PartialEq)]
pub enum TimelineContent<'a> {
    Markers(&'a [SuspiciousFrame]),
    Unavailable(&'static str),
}

/// Markers only for video; images get the unavailable notice whatever frames they carry
pub fn timeline(result: &AnalysisResult) -> TimelineContent<'_> {
    if result.media_type.is_video() {
        TimelineContent::Markers(&result.suspicious_frames)
    } else {
        TimelineContent::Unavailable(TIMELINE_UNAVAILABLE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    pub label: &'static str,
    pub value: String,
    pub monospace: bool,
}

impl MetadataRow {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into(), monospace: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataSections {
    pub file_info: Vec<MetadataRow>,
    pub technical: Vec<MetadataRow>,
}

/// File information plus the fixed technical details. The analysis date is
/// rendered in `tz`.
pub fn metadata_rows<Tz: TimeZone>(result: &AnalysisResult, tz: &Tz) -> MetadataSections
where
    Tz::Offset: std::fmt::Display,
{
    let analyzed_at = result.timestamp.with_timezone(tz);
    MetadataSections {
        file_info: vec![
            MetadataRow::text("Filename", result.file_name.clone()),
            MetadataRow::text("Type", result.media_type.to_string()),
            MetadataRow::text(
                "Analysis Date",
                analyzed_at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            ),
            MetadataRow {
                label: "File Hash",
                value: result.id.clone(),
                monospace: true,
            },
        ],
        technical: vec![
            MetadataRow::text("Model Version", "v2.1.3"),
            MetadataRow::text("Processing Time", "3.2s"),
            MetadataRow::text("Confidence Threshold", "75%"),
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTone {
    Info,
    Success,
    Insight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainSection {
    pub title: &'static str,
    pub body: String,
    pub tone: SectionTone,
}

pub fn confidence_descriptor(confidence: u8) -> &'static str {
    if confidence >= 80 {
        "highly confident"
    } else if confidence >= 60 {
        "moderately confident"
    } else {
        "uncertain"
    }
}

pub fn explainability(result: &AnalysisResult) -> Vec<ExplainSection> {
    let subject = if result.media_type.is_video() {
        "2,847 frames"
    } else {
        "the image"
    };

    vec![
        ExplainSection {
            title: "Neural Network Analysis",
            body: format!(
                "Our CNN-LSTM hybrid model analyzed {} using 47 different feature extraction \
                 layers, focusing on facial geometry, lighting patterns, and temporal consistency.",
                subject
            ),
            tone: SectionTone::Info,
        },
        ExplainSection {
            title: "Feature Importance",
            body: "The most significant factors in this analysis were texture inconsistencies \
                   (23%), lighting anomalies (18%), and facial landmark deviations (15%)."
                .to_string(),
            tone: SectionTone::Success,
        },
        ExplainSection {
            title: "Model Confidence",
            body: format!(
                "This result has a confidence score of {}%, which means the model is {} about \
                 this classification.",
                result.confidence,
                confidence_descriptor(result.confidence)
            ),
            tone: SectionTone::Insight,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaType;
    use chrono::TimeZone;

    fn image_result() -> AnalysisResult {
        let mut result = AnalysisResult::sample(Utc::now());
        result.media_type = MediaType::Image;
        result.analysis.temporal_consistency = None;
        result
    }

    #[test]
    fn test_view_defaults_to_sample() {
        let view = ResultsView::new(None, VerdictPolicy::default(), Utc::now());
        assert_eq!(view.results().len(), 1);
        assert_eq!(view.current().file_name, "sample-video.mp4");
        assert_eq!(view.active_tab(), ResultTab::Overview);
        assert_eq!(view.verdict(), Verdict::Real);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut view = ResultsView::new(None, VerdictPolicy::default(), Utc::now());
        view.select(4);
        assert_eq!(view.selected(), 0);
        view.set_tab(ResultTab::Metadata);
        assert_eq!(view.active_tab().index(), 3);
    }

    #[test]
    fn test_summary_line() {
        let view = ResultsView::new(None, VerdictPolicy::default(), Utc::now());
        let at = NaiveTime::from_hms_opt(14, 5, 9).unwrap();
        assert_eq!(view.summary_line(at), "1 file analyzed • Completed 14:05:09");

        let now = Utc::now();
        let two = ResultsPayload {
            files: Vec::new(),
            results: vec![AnalysisResult::sample(now), AnalysisResult::sample(now)],
        };
        let view = ResultsView::new(Some(two), VerdictPolicy::default(), now);
        assert!(view.summary_line(at).starts_with("2 files analyzed"));
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = ResultTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Overview", "Heatmap", "Timeline", "Metadata", "Explainability"]);
        assert_eq!(ResultTab::from_index(4), Some(ResultTab::Explainability));
        assert_eq!(ResultTab::from_index(5), None);
    }

    #[test]
    fn test_overview_scores_skip_missing_temporal() {
        let video = AnalysisResult::sample(Utc::now());
        assert_eq!(overview_scores(&video).len(), 5);
        assert_eq!(overview_scores(&video)[2], ScoreRow { label: "Temporal Consistency", score: 58 });

        let labels: Vec<_> = overview_scores(&image_result()).iter().map(|r| r.label).collect();
        assert!(!labels.contains(&"Temporal Consistency"));
    }

    #[test]
    fn test_timeline_gated_on_video() {
        let video = AnalysisResult::sample(Utc::now());
        match timeline(&video) {
            TimelineContent::Markers(frames) => assert_eq!(frames.len(), 3),
            other => panic!("unexpected {:?}", other),
        }

        // image still carrying frames shows no markers
        let image = image_result();
        assert!(!image.suspicious_frames.is_empty());
        assert_eq!(timeline(&image), TimelineContent::Unavailable(TIMELINE_UNAVAILABLE));
    }

    #[test]
    fn test_metadata_rows() {
        let mut result = AnalysisResult::sample(Utc.with_ymd_and_hms(2025, 1, 15, 15, 4, 5).unwrap());
        result.id = "1736953445000".to_string();
        let sections = metadata_rows(&result, &Utc);
        assert_eq!(sections.file_info[0].value, "sample-video.mp4");
        assert_eq!(sections.file_info[1].value, "video");
        assert_eq!(sections.file_info[2].value, "1/15/2025, 3:04:05 PM");
        assert!(sections.file_info[3].monospace);
        let technical: Vec<_> = sections.technical.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(technical, vec!["v2.1.3", "3.2s", "75%"]);
    }

    #[test]
    fn test_explainability_text() {
        let video = AnalysisResult::sample(Utc::now());
        let sections = explainability(&video);
        assert!(sections[0].body.contains("2,847 frames"));
        assert!(sections[2].body.contains("87%"));
        assert!(sections[2].body.contains("highly confident"));

        let mut image = image_result();
        image.confidence = 65;
        let sections = explainability(&image);
        assert!(sections[0].body.contains("the image"));
        assert!(sections[2].body.contains("moderately confident"));
        assert_eq!(confidence_descriptor(59), "uncertain");
    }
}
