//! Help page FAQ

use super::{filter_matches, term_matches, Category, ALL};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

pub const CATEGORIES: [Category; 6] = [
    Category { id: ALL, name: "All Topics" },
    Category { id: "getting-started", name: "Getting Started" },
    Category { id: "accuracy", name: "Accuracy & Results" },
    Category { id: "privacy", name: "Privacy & Security" },
    Category { id: "technical", name: "Technical Issues" },
    Category { id: "billing", name: "Billing & Plans" },
];

pub const FAQS: [Faq; 10] = [
    Faq {
        id: 1,
        question: "How accurate is the deepfake detection?",
        answer: "Our AI model achieves 80% accuracy in detecting deepfakes across various types of content. The accuracy can vary depending on the quality of the input media and the sophistication of the manipulation techniques used.",
        category: "accuracy",
        tags: &["accuracy", "detection", "AI model"],
    },
    Faq {
        id: 2,
        question: "What file formats are supported?",
        answer: "We support most common image formats (JPG, PNG, GIF, BMP, WebP) and video formats (MP4, MOV, AVI, MKV, WebM, FLV). Maximum file size is 100MB per file.",
        category: "getting-started",
        tags: &["file formats", "supported formats", "upload"],
    },
    Faq {
        id: 3,
        question: "How long does analysis take?",
        answer: "Most analyses complete within 3-5 seconds for images and 10-30 seconds for videos, depending on the file size and complexity. You'll see a progress indicator during processing.",
        category: "getting-started",
        tags: &["processing time", "analysis speed", "performance"],
    },
    Faq {
        id: 4,
        question: "Is my data secure and private?",
        answer: "Yes, we take privacy seriously. All uploaded files are automatically deleted after analysis, and we never store or share your content. Our platform uses end-to-end encryption for all data transmission.",
        category: "privacy",
        tags: &["privacy", "security", "data protection"],
    },
    Faq {
        id: 5,
        question: "What does the confidence score mean?",
        answer: "The confidence score indicates how certain our AI is about the detection result. Scores above 80% are considered highly confident, 60-80% moderately confident, and below 60% uncertain. We recommend treating low-confidence results with caution.",
        category: "accuracy",
        tags: &["confidence score", "results interpretation", "accuracy"],
    },
    Faq {
        id: 6,
        question: "Can I analyze multiple files at once?",
        answer: "Yes, you can upload up to 5 files simultaneously for batch analysis. Each file will be processed independently and you'll receive separate results for each one.",
        category: "getting-started",
        tags: &["batch upload", "multiple files", "bulk analysis"],
    },
    Faq {
        id: 7,
        question: "What if I disagree with the analysis result?",
        answer: "You can report false positives or negatives using the \"Report Issue\" button on the results page. This helps us improve our models. We also provide detailed explanations for each detection to help you understand the reasoning.",
        category: "accuracy",
        tags: &["false positive", "reporting", "feedback"],
    },
    Faq {
        id: 8,
        question: "Do you offer API access?",
        answer: "Yes, we provide REST API access for developers and enterprises. The API allows you to integrate deepfake detection into your own applications. Contact us for API documentation and pricing.",
        category: "technical",
        tags: &["API", "integration", "developers"],
    },
    Faq {
        id: 9,
        question: "How does the heatmap visualization work?",
        answer: "The heatmap shows areas where our AI detected potential manipulation. Red areas indicate suspicious regions with higher confidence scores. You can adjust the opacity to see the original image underneath.",
        category: "technical",
        tags: &["heatmap", "visualization", "analysis"],
    },
    Faq {
        id: 10,
        question: "What happens if the analysis fails?",
        answer: "If analysis fails, you'll receive an error message with details about the issue. Common causes include unsupported file formats, corrupted files, or server issues. You can try uploading again or contact support if the problem persists.",
        category: "technical",
        tags: &["error handling", "troubleshooting", "support"],
    },
];

/// Search box plus category chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqQuery {
    pub term: String,
    pub category: String,
}

impl Default for FaqQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: ALL.to_string(),
        }
    }
}

impl FaqQuery {
    pub fn matches(&self, faq: &Faq) -> bool {
        term_matches(&self.term, &[faq.question, faq.answer], faq.tags)
            && filter_matches(&self.category, faq.category)
    }

    pub fn apply<'a>(&self, faqs: &'a [Faq]) -> Vec<&'a Faq> {
        faqs.iter().filter(|faq| self.matches(faq)).collect()
    }
}

/// Which answers are open. Items toggle independently of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqExpansion {
    open: BTreeSet<u32>,
}

impl FaqExpansion {
    pub fn toggle(&mut self, id: u32) {
        if !self.open.remove(&id) {
            self.open.insert(id);
        }
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.open.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(term: &str, category: &str) -> FaqQuery {
        FaqQuery {
            term: term.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_tag_only_match() {
        // "troubleshooting" appears only in the tags of FAQ 10
        let hits = query("Troubleshooting", ALL).apply(&FAQS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 10);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(query("quantum blockchain", ALL).apply(&FAQS).is_empty());
    }

    #[test]
    fn test_category_intersection() {
        assert_eq!(FaqQuery::default().apply(&FAQS).len(), 10);
        assert_eq!(query("", "technical").apply(&FAQS).len(), 3);
        assert!(query("", "billing").apply(&FAQS).is_empty());
        let hits = query("accuracy", "getting-started").apply(&FAQS);
        assert!(hits.iter().all(|f| f.category == "getting-started"));
    }

    #[test]
    fn test_expansion_is_per_item() {
        let mut expansion = FaqExpansion::default();
        expansion.toggle(1);
        expansion.toggle(4);
        assert!(expansion.is_expanded(1));
        assert!(expansion.is_expanded(4));
        expansion.toggle(1);
        assert!(!expansion.is_expanded(1));
        assert!(expansion.is_expanded(4));
    }
}
