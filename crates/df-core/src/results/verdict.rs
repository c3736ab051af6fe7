//! Verdict rules

use crate::model::AnalysisResult;
use serde::{Deserialize, Serialize};

/// How the Real/Fake label is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum VerdictPolicy {
    /// Confidence below `fake_below` reads as Fake, anything else as Real.
    /// The stored `is_real` flag is not consulted.
    ConfidenceThreshold { fake_below: u8 },
    /// Use the `is_real` flag set when the prediction was mapped
    StoredFlag,
}

impl Default for VerdictPolicy {
    fn default() -> Self {
        VerdictPolicy::ConfidenceThreshold { fake_below: 60 }
    }
}

impl VerdictPolicy {
    pub fn verdict(&self, result: &AnalysisResult) -> Verdict {
        match *self {
            VerdictPolicy::ConfidenceThreshold { fake_below } => {
                if result.confidence < fake_below {
                    Verdict::Fake
                } else {
                    Verdict::Real
                }
            }
            VerdictPolicy::StoredFlag => {
                if result.is_real {
                    Verdict::Real
                } else {
                    Verdict::Fake
                }
            }
        }
    }

    /// Line in the results list, e.g. `Fake (42%)`
    pub fn entry_label(&self, result: &AnalysisResult) -> String {
        format!("{} ({}%)", self.verdict(result), result.confidence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Real,
    Fake,
}

/// Colour family the verdict is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Positive,
    Caution,
}

impl Verdict {
    pub fn tone(self) -> VerdictTone {
        match self {
            Verdict::Real => VerdictTone::Positive,
            Verdict::Fake => VerdictTone::Caution,
        }
    }

    pub fn is_fake(self) -> bool {
        matches!(self, Verdict::Fake)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Real => write!(f, "Real"),
            Verdict::Fake => write!(f, "Fake"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn with(confidence: u8, is_real: bool) -> AnalysisResult {
        let mut result = AnalysisResult::sample(Utc::now());
        result.confidence = confidence;
        result.is_real = is_real;
        result
    }

    #[test]
    fn test_threshold_ignores_stored_flag() {
        let policy = VerdictPolicy::default();
        for confidence in 0..=100u8 {
            for is_real in [true, false] {
                let expected = if confidence < 60 { Verdict::Fake } else { Verdict::Real };
                assert_eq!(policy.verdict(&with(confidence, is_real)), expected);
            }
        }
    }

    #[test]
    fn test_stored_flag_policy() {
        let policy = VerdictPolicy::StoredFlag;
        assert_eq!(policy.verdict(&with(95, false)), Verdict::Fake);
        assert_eq!(policy.verdict(&with(10, true)), Verdict::Real);
    }

    #[test]
    fn test_entry_label_and_tone() {
        let policy = VerdictPolicy::default();
        assert_eq!(policy.entry_label(&with(42, true)), "Fake (42%)");
        assert_eq!(policy.entry_label(&with(87, false)), "Real (87%)");
        assert_eq!(Verdict::Fake.tone(), VerdictTone::Caution);
        assert_eq!(Verdict::Real.tone(), VerdictTone::Positive);
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&VerdictPolicy::default()).unwrap();
        assert_eq!(json, r#"{"rule":"confidence_threshold","fake_below":60}"#);
        let back: VerdictPolicy = serde_json::from_str(r#"{"rule":"stored_flag"}"#).unwrap();
        assert_eq!(back, VerdictPolicy::StoredFlag);
    }
}
