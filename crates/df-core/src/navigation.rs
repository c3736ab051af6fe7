//! One-shot navigation state between the upload and results pages

use crate::media::SelectedFile;
use crate::model::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// What the upload page hands to the results page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsPayload {
    pub files: Vec<SelectedFile>,
    pub results: Vec<AnalysisResult>,
}

impl ResultsPayload {
    /// Default substitution at the results page boundary: a missing payload,
    /// or one without results, becomes the sample result.
    pub fn resolve(payload: Option<ResultsPayload>, now: DateTime<Utc>) -> Self {
        match payload {
            Some(payload) if !payload.results.is_empty() => payload,
            Some(payload) => Self {
                files: payload.files,
                results: vec![AnalysisResult::sample(now)],
            },
            None => Self {
                files: Vec::new(),
                results: vec![AnalysisResult::sample(now)],
            },
        }
    }
}

/// Single-slot handoff. Written by the upload page, taken by the results page.
#[derive(Debug, Clone, Default)]
pub struct PayloadSlot {
    inner: Rc<RefCell<Option<ResultsPayload>>>,
}

impl PayloadSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever an earlier upload left behind
    pub fn put(&self, payload: ResultsPayload) {
        *self.inner.borrow_mut() = Some(payload);
    }

    pub fn take(&self) -> Option<ResultsPayload> {
        self.inner.borrow_mut().take()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_substitutes_sample() {
        let now = Utc::now();
        let resolved = ResultsPayload::resolve(None, now);
        assert_eq!(resolved.results, vec![AnalysisResult::sample(now)]);

        let empty = ResultsPayload::resolve(Some(ResultsPayload::default()), now);
        assert_eq!(empty.results.len(), 1);
        assert_eq!(empty.results[0].file_name, "sample-video.mp4");
    }

    #[test]
    fn test_resolve_keeps_real_results() {
        let now = Utc::now();
        let mut result = AnalysisResult::sample(now);
        result.file_name = "mine.mp4".to_string();
        let payload = ResultsPayload {
            files: Vec::new(),
            results: vec![result.clone()],
        };
        assert_eq!(ResultsPayload::resolve(Some(payload), now).results, vec![result]);
    }

    #[test]
    fn test_slot_is_read_once() {
        let slot = PayloadSlot::new();
        let shared = slot.clone();
        assert!(slot.take().is_none());

        shared.put(ResultsPayload::default());
        assert!(!slot.is_empty());
        assert!(slot.take().is_some());
        assert!(slot.take().is_none());
    }
}
