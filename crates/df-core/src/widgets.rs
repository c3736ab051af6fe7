//! Presentational primitives
//!
//! State and styling rules for the small building blocks (buttons, cards,
//! meters, progress bars, tab strips). The Leptos components only render
//! what is decided here.

/// Colour band of a confidence value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Moderate,
    Low,
    Critical,
}

impl ConfidenceTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ConfidenceTier::High,
            60..=79 => ConfidenceTier::Moderate,
            40..=59 => ConfidenceTier::Low,
            _ => ConfidenceTier::Critical,
        }
    }

    /// Gradient of the meter fill
    pub fn fill_class(self) -> &'static str {
        match self {
            ConfidenceTier::High => "from-green-500 to-green-600",
            ConfidenceTier::Moderate => "from-yellow-500 to-yellow-600",
            ConfidenceTier::Low => "from-orange-500 to-orange-600",
            ConfidenceTier::Critical => "from-red-500 to-red-600",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            ConfidenceTier::High => "text-green-600 dark:text-green-400",
            ConfidenceTier::Moderate => "text-yellow-600 dark:text-yellow-400",
            ConfidenceTier::Low => "text-orange-600 dark:text-orange-400",
            ConfidenceTier::Critical => "text-red-600 dark:text-red-400",
        }
    }
}

/// Width of the meter fill in percent; always the confidence itself
pub fn meter_fill_percent(confidence: u8) -> u8 {
    confidence.min(100)
}

pub fn progress_label(progress: f64) -> String {
    format!("{}%", progress.round() as i64)
}

/// Width of a progress bar fill, clamped to 0..=100
pub fn progress_width(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidgetSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl WidgetSize {
    pub fn meter_height(self) -> &'static str {
        match self {
            WidgetSize::Sm => "h-2",
            WidgetSize::Md => "h-3",
            WidgetSize::Lg => "h-4",
        }
    }

    pub fn bar_height(self) -> &'static str {
        match self {
            WidgetSize::Sm => "h-1",
            WidgetSize::Md => "h-2",
            WidgetSize::Lg => "h-3",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgressColor {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

impl ProgressColor {
    pub fn fill_class(self) -> &'static str {
        match self {
            ProgressColor::Primary => "from-primary-500 to-primary-600",
            ProgressColor::Secondary => "from-secondary-500 to-secondary-600",
            ProgressColor::Success => "from-green-500 to-green-600",
            ProgressColor::Warning => "from-yellow-500 to-yellow-600",
            ProgressColor::Danger => "from-red-500 to-red-600",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TabVariant {
    #[default]
    Default,
    Pills,
    Underline,
}

impl TabVariant {
    pub fn strip_class(self) -> &'static str {
        match self {
            TabVariant::Default => "border-b border-secondary-200 dark:border-secondary-700",
            TabVariant::Pills => "bg-secondary-100 dark:bg-secondary-800 rounded-lg p-1",
            TabVariant::Underline => "border-b-2 border-secondary-200 dark:border-secondary-700",
        }
    }

    pub fn tab_class(self, active: bool) -> &'static str {
        match (self, active) {
            (TabVariant::Pills, true) => {
                "rounded-md bg-white dark:bg-secondary-700 text-primary-600 dark:text-primary-400 shadow-sm"
            }
            (TabVariant::Pills, false) => {
                "rounded-md text-secondary-600 dark:text-secondary-400 hover:text-primary-600 dark:hover:text-primary-400"
            }
            (_, true) => "border-b-2 text-primary-600 dark:text-primary-400 border-primary-500",
            (_, false) => {
                "border-b-2 text-secondary-600 dark:text-secondary-400 border-transparent hover:text-primary-600 dark:hover:text-primary-400"
            }
        }
    }
}

/// Active index of a tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStrip {
    active: usize,
    len: usize,
}

impl TabStrip {
    pub fn new(len: usize, initial: usize) -> Self {
        Self {
            active: if initial < len { initial } else { 0 },
            len,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the index to report to the change callback, if it is valid
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.len {
            self.active = index;
            Some(index)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, disabled: bool) -> String {
    let base = "inline-flex items-center justify-center font-medium rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2";
    let variant = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-primary-600 to-accent-600 text-white hover:from-primary-700 hover:to-accent-700 focus:ring-primary-500 shadow-lg",
        ButtonVariant::Secondary => "bg-secondary-100 text-secondary-900 hover:bg-secondary-200 dark:bg-secondary-800 dark:text-white dark:hover:bg-secondary-700 focus:ring-secondary-500",
        ButtonVariant::Outline => "border-2 border-primary-600 text-primary-600 hover:bg-primary-50 dark:border-primary-400 dark:text-primary-400 dark:hover:bg-primary-900/20 focus:ring-primary-500",
        ButtonVariant::Ghost => "text-secondary-700 hover:bg-secondary-100 dark:text-secondary-300 dark:hover:bg-secondary-800 focus:ring-secondary-500",
    };
    let size = match size {
        ButtonSize::Sm => "px-3 py-1.5 text-sm",
        ButtonSize::Md => "px-4 py-2 text-sm",
        ButtonSize::Lg => "px-6 py-3 text-base",
    };
    let state = if disabled { "opacity-50 cursor-not-allowed" } else { "" };
    format!("{} {} {} {}", base, variant, size, state).trim_end().to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Default,
    Lg,
}

pub fn card_class(padding: CardPadding, hover: bool, extra: &str) -> String {
    let padding = match padding {
        CardPadding::None => "",
        CardPadding::Sm => "p-4",
        CardPadding::Default => "p-6",
        CardPadding::Lg => "p-8",
    };
    let hover = if hover {
        "transition-transform duration-200 hover:-translate-y-1 hover:shadow-xl"
    } else {
        ""
    };
    [
        "bg-white dark:bg-secondary-800 rounded-xl shadow-lg border border-secondary-200 dark:border-secondary-700",
        padding,
        hover,
        extra,
    ]
    .iter()
    .filter(|c| !c.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_fill_equals_confidence() {
        for confidence in 0..=100u8 {
            assert_eq!(meter_fill_percent(confidence), confidence);
        }
        assert_eq!(meter_fill_percent(250), 100);
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(ConfidenceTier::from_score(80), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_score(79), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::from_score(60), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::from_score(40), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(39), ConfidenceTier::Critical);
        assert_eq!(ConfidenceTier::from_score(0).fill_class(), "from-red-500 to-red-600");
    }

    #[test]
    fn test_progress_label() {
        assert_eq!(progress_label(0.0), "0%");
        assert_eq!(progress_label(29.6), "30%");
        assert_eq!(progress_label(100.0), "100%");
        assert_eq!(progress_width(140.0), 100.0);
        assert_eq!(progress_width(f64::NAN), 0.0);
    }

    #[test]
    fn test_tab_strip_select() {
        let mut strip = TabStrip::new(5, 0);
        assert_eq!(strip.select(3), Some(3));
        assert_eq!(strip.active(), 3);
        assert_eq!(strip.select(5), None);
        assert_eq!(strip.active(), 3);
        assert_eq!(TabStrip::new(2, 9).active(), 0);
    }

    #[test]
    fn test_tab_classes() {
        assert!(TabVariant::Pills.tab_class(true).contains("shadow-sm"));
        assert!(TabVariant::Underline.tab_class(false).contains("border-transparent"));
    }

    #[test]
    fn test_card_and_button_classes() {
        assert_eq!(
            card_class(CardPadding::None, false, ""),
            "bg-white dark:bg-secondary-800 rounded-xl shadow-lg border border-secondary-200 dark:border-secondary-700"
        );
        assert!(card_class(CardPadding::Lg, true, "mb-6").ends_with("hover:shadow-xl mb-6"));
        assert!(button_class(ButtonVariant::Outline, ButtonSize::Lg, true).contains("cursor-not-allowed"));
        assert!(!button_class(ButtonVariant::Primary, ButtonSize::Md, false).ends_with(' '));
    }
}
