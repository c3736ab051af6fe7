//! Landing page copy and the rotating stat highlight

/// Milliseconds between highlight changes
pub const ROTATE_INTERVAL_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "1K+", label: "Analyses Completed" },
    Stat { value: "80%", label: "Model Accuracy" },
    Stat { value: "100%", label: "Privacy Guaranteed" },
    Stat { value: "24/7", label: "Real-time Detection" },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Advanced AI Detection",
        description: "Powered by state-of-the-art neural networks trained on millions of real and synthetic media samples.",
    },
    Feature {
        title: "Instant Results",
        description: "Get analysis results in seconds with our optimized detection pipeline and cloud infrastructure.",
    },
    Feature {
        title: "Privacy First",
        description: "Your files are processed securely and automatically deleted after analysis. No data retention.",
    },
    Feature {
        title: "Visual Analysis",
        description: "See exactly where manipulations occur with detailed heatmaps and frame-by-frame analysis.",
    },
];

/// Upload page sidebar
pub const UPLOAD_FEATURES: [Feature; 4] = [
    Feature {
        title: "Advanced AI Detection",
        description: "State-of-the-art neural networks trained on millions of samples",
    },
    Feature {
        title: "Lightning Fast",
        description: "Get results in seconds with our optimized detection pipeline",
    },
    Feature {
        title: "Privacy First",
        description: "Files are automatically deleted after processing",
    },
    Feature {
        title: "Visual Analysis",
        description: "See exactly where manipulations occur with detailed heatmaps",
    },
];

/// Index of the highlighted stat. The timer driving it belongs to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRotator {
    index: usize,
    len: usize,
}

impl StatRotator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotator_wraps() {
        let mut rotator = StatRotator::new(STATS.len());
        let seen: Vec<_> = (0..5).map(|_| rotator.advance()).collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
        assert!(rotator.is_active(1));
    }

    #[test]
    fn test_empty_rotator_stays_put() {
        let mut rotator = StatRotator::new(0);
        assert_eq!(rotator.advance(), 0);
    }
}
