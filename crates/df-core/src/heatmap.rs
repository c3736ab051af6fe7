//! Heatmap overlay opacity

/// Overlay opacity in tenths, 0..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeatmapOpacity(u8);

impl Default for HeatmapOpacity {
    fn default() -> Self {
        HeatmapOpacity(7)
    }
}

impl HeatmapOpacity {
    pub const STEP: f64 = 0.1;

    /// Snap any value onto the 0.1 grid inside 0.0..=1.0
    pub fn from_value(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        HeatmapOpacity((value * 10.0).round().clamp(0.0, 10.0) as u8)
    }

    /// Parse the range input's value. Unparseable input yields `None`.
    pub fn from_input(raw: &str) -> Option<Self> {
        raw.trim().parse::<f64>().ok().map(Self::from_value)
    }

    pub fn value(self) -> f64 {
        self.0 as f64 / 10.0
    }

    pub fn percent(self) -> u8 {
        self.0 * 10
    }

    pub fn label(self) -> String {
        format!("Heatmap Opacity: {}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seventy_percent() {
        let opacity = HeatmapOpacity::default();
        assert_eq!(opacity.value(), 0.7);
        assert_eq!(opacity.percent(), 70);
        assert_eq!(opacity.label(), "Heatmap Opacity: 70%");
    }

    #[test]
    fn test_from_input_snaps_and_clamps() {
        assert_eq!(HeatmapOpacity::from_input("0.3").unwrap().percent(), 30);
        assert_eq!(HeatmapOpacity::from_input("0.34").unwrap().percent(), 30);
        assert_eq!(HeatmapOpacity::from_input("1.7").unwrap().percent(), 100);
        assert_eq!(HeatmapOpacity::from_input("-2").unwrap().percent(), 0);
        assert!(HeatmapOpacity::from_input("abc").is_none());
    }
}
