//! Video player state
//!
//! Mirrors the `<video>` element: the element reports time and duration
//! through events, and every control returns the value to push back to it.

use crate::model::SuspiciousFrame;

/// Seconds skipped by the back/forward buttons
pub const SKIP_SECONDS: f64 = 10.0;

/// How close the playhead must be to a flagged frame to show the indicator
pub const FRAME_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    pub current_time: f64,
    pub duration: f64,
    pub playing: bool,
    pub volume: f64,
    pub muted: bool,
    pub controls_visible: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            playing: false,
            volume: 1.0,
            muted: false,
            controls_visible: true,
        }
    }
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    /// `loadedmetadata`. NaN and infinite durations (streams) count as unknown.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
    }

    /// `timeupdate`
    pub fn set_time(&mut self, time: f64) {
        if time.is_finite() {
            self.current_time = time.max(0.0);
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Flip the play state; returns whether the element should now play
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Click on the scrubber at `fraction` of its width; returns the new time
    pub fn seek_fraction(&mut self, fraction: f64) -> f64 {
        let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
        self.current_time = fraction * self.duration;
        self.current_time
    }

    /// Jump to a marker's timestamp; returns the new time
    pub fn seek_to(&mut self, time: f64) -> f64 {
        let upper = if self.duration > 0.0 { self.duration } else { f64::MAX };
        self.current_time = if time.is_finite() { time.clamp(0.0, upper) } else { 0.0 };
        self.current_time
    }

    /// Move by `delta` seconds, kept inside `0..=duration`
    pub fn skip(&mut self, delta: f64) -> f64 {
        let target = (self.current_time + delta).max(0.0);
        self.current_time = target.min(self.duration.max(0.0));
        self.current_time
    }

    /// Volume slider; zero mutes
    pub fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { 1.0 };
        self.volume = volume;
        self.muted = volume == 0.0;
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// What the slider shows
    pub fn slider_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn marker_percent(&self, timestamp: f64) -> f64 {
        if self.duration > 0.0 {
            timestamp / self.duration * 100.0
        } else {
            0.0
        }
    }

    /// First flagged frame within [`FRAME_TOLERANCE`] of the playhead
    pub fn frame_at<'a>(&self, frames: &'a [SuspiciousFrame]) -> Option<&'a SuspiciousFrame> {
        frames
            .iter()
            .find(|frame| (frame.timestamp - self.current_time).abs() < FRAME_TOLERANCE)
    }

    pub fn time_label(&self) -> String {
        format!("{} / {}", format_time(self.current_time), format_time(self.duration))
    }
}

/// `m:ss`
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames() -> Vec<SuspiciousFrame> {
        vec![
            SuspiciousFrame { timestamp: 2.5, confidence: 0.85 },
            SuspiciousFrame { timestamp: 5.2, confidence: 0.72 },
        ]
    }

    #[test]
    fn test_unknown_duration_has_zero_progress() {
        let mut playback = Playback::new();
        playback.set_duration(f64::NAN);
        playback.set_time(3.0);
        assert_eq!(playback.progress_percent(), 0.0);
        assert_eq!(playback.marker_percent(2.5), 0.0);
    }

    #[test]
    fn test_progress_and_markers() {
        let mut playback = Playback::new();
        playback.set_duration(20.0);
        playback.set_time(5.0);
        assert_eq!(playback.progress_percent(), 25.0);
        assert_eq!(playback.marker_percent(2.5), 12.5);
        assert_eq!(playback.seek_fraction(0.5), 10.0);
    }

    #[test]
    fn test_seek_to_clamps() {
        let mut playback = Playback::new();
        playback.set_duration(20.0);
        assert_eq!(playback.seek_to(8.1), 8.1);
        assert_eq!(playback.current_time, 8.1);
        assert_eq!(playback.seek_to(25.0), 20.0);
        assert_eq!(playback.seek_to(-1.0), 0.0);
        assert_eq!(playback.seek_to(f64::NAN), 0.0);
    }

    #[test]
    fn test_skip_is_clamped() {
        let mut playback = Playback::new();
        playback.set_duration(12.0);
        playback.set_time(4.0);
        assert_eq!(playback.skip(-SKIP_SECONDS), 0.0);
        assert_eq!(playback.skip(SKIP_SECONDS), 10.0);
        assert_eq!(playback.skip(SKIP_SECONDS), 12.0);
    }

    #[test]
    fn test_volume_and_mute() {
        let mut playback = Playback::new();
        playback.set_volume(0.0);
        assert!(playback.muted);
        playback.set_volume(0.4);
        assert!(!playback.muted);
        assert!(playback.toggle_mute());
        assert_eq!(playback.slider_volume(), 0.0);
    }

    #[test]
    fn test_frame_at_tolerance() {
        let mut playback = Playback::new();
        playback.set_duration(10.0);
        let frames = frames();

        playback.set_time(2.1);
        assert_eq!(playback.frame_at(&frames).unwrap().timestamp, 2.5);
        playback.set_time(3.0);
        assert!(playback.frame_at(&frames).is_none());
        playback.set_time(5.5);
        assert_eq!(playback.frame_at(&frames).unwrap().label(), "72%");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(8.1), "0:08");
        assert_eq!(format_time(125.9), "2:05");
        assert_eq!(format_time(f64::NAN), "0:00");
    }
}
