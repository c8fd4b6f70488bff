//! Blink state machine

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Blink detector configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlinkConfig {
    /// EAR below this value counts as closed
    pub ear_threshold: f64,

    /// Minimum below-threshold frames for a valid blink
    pub min_frames: u32,

    /// Maximum below-threshold frames for a valid blink
    pub max_frames: u32,
}

impl Default for BlinkConfig {
    /// Tuned for ~30 fps capture: 2-12 frames spans 66-400 ms,
    /// the physiological blink duration range.
    fn default() -> Self {
        Self {
            ear_threshold: 0.21,
            min_frames: 2,
            max_frames: 12,
        }
    }
}

/// A completed, validated blink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlinkEvent {
    /// Timestamp when EAR first dropped below threshold (seconds)
    pub start_time: f64,

    /// Timestamp when EAR recovered above threshold (seconds)
    pub end_time: f64,

    /// Frames spent below threshold
    pub duration_frames: u32,

    /// The excursion passed the duration bounds
    pub complete: bool,
}

/// Detector state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlinkState {
    /// Resting, EAR at or above threshold
    #[default]
    Open,
    /// EAR below threshold, excursion in progress
    Closing,
}

/// Streaming blink detector.
///
/// One instance per subject/session; state is mutated only by [`update`]
/// and must be confined to a single logical thread. There is no terminal
/// state and no internal time-based expiry; session boundaries are handled
/// by the caller via [`reset`].
///
/// [`update`]: BlinkDetector::update
/// [`reset`]: BlinkDetector::reset
#[derive(Debug, Clone)]
pub struct BlinkDetector {
    config: BlinkConfig,
    state: BlinkState,
    frame_count: u32,
    excursion_start: f64,
}

impl BlinkDetector {
    pub fn new(config: BlinkConfig) -> Self {
        Self {
            config,
            state: BlinkState::Open,
            frame_count: 0,
            excursion_start: 0.0,
        }
    }

    /// Current machine state
    pub fn state(&self) -> BlinkState {
        self.state
    }

    /// Feed one EAR sample; returns a blink if this sample completes one.
    ///
    /// An excursion ends when EAR recovers to the threshold or above. Its
    /// frame count is then checked against `[min_frames, max_frames]`
    /// inclusive; out-of-range excursions are discarded.
    pub fn update(&mut self, ear: f64, timestamp: f64) -> Option<BlinkEvent> {
        if ear < self.config.ear_threshold {
            match self.state {
                BlinkState::Open => {
                    self.state = BlinkState::Closing;
                    self.frame_count = 1;
                    self.excursion_start = timestamp;
                }
                BlinkState::Closing => {
                    self.frame_count += 1;
                }
            }
            return None;
        }

        if self.state == BlinkState::Open {
            return None;
        }

        // Excursion over: validate duration
        self.state = BlinkState::Open;
        let frames = self.frame_count;
        self.frame_count = 0;

        if frames >= self.config.min_frames && frames <= self.config.max_frames {
            Some(BlinkEvent {
                start_time: self.excursion_start,
                end_time: timestamp,
                duration_frames: frames,
                complete: true,
            })
        } else {
            debug!(frames, "discarding out-of-range EAR excursion");
            None
        }
    }

    /// Return to the resting state, discarding any in-progress excursion.
    /// Called by the owning session at session boundaries.
    pub fn reset(&mut self) {
        self.state = BlinkState::Open;
        self.frame_count = 0;
        self.excursion_start = 0.0;
    }
}

impl Default for BlinkDetector {
    fn default() -> Self {
        Self::new(BlinkConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a frame sequence at ~30 fps; collects emitted blinks
    fn run(detector: &mut BlinkDetector, ears: &[f64]) -> Vec<BlinkEvent> {
        ears.iter()
            .enumerate()
            .filter_map(|(i, &ear)| detector.update(ear, i as f64 / 30.0))
            .collect()
    }

    #[test]
    fn test_single_blink_detected() {
        let mut detector = BlinkDetector::default();
        let mut signal = vec![0.30; 5];
        signal.extend(vec![0.10; 4]);
        signal.extend(vec![0.30; 5]);

        let events = run(&mut detector, &signal);
        assert_eq!(events.len(), 1);
        let event = events[0];
        assert_eq!(event.duration_frames, 4);
        assert!(event.complete);
        assert!((event.start_time - 5.0 / 30.0).abs() < 1e-9);
        assert!((event.end_time - 9.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_too_short_excursion_ignored() {
        let mut detector = BlinkDetector::default();
        let events = run(&mut detector, &[0.30, 0.10, 0.30, 0.30]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_too_long_excursion_ignored() {
        // 15 frames below threshold exceeds max_frames=12: sustained
        // closure, not a blink
        let mut detector = BlinkDetector::default();
        let mut signal = vec![0.30; 3];
        signal.extend(vec![0.08; 15]);
        signal.extend(vec![0.30; 3]);

        let events = run(&mut detector, &signal);
        assert!(events.is_empty());
        assert_eq!(detector.state(), BlinkState::Open);
    }

    #[test]
    fn test_boundary_durations_inclusive() {
        let config = BlinkConfig::default();

        let mut detector = BlinkDetector::new(config);
        let mut signal = vec![0.30];
        signal.extend(vec![0.10; 2]);
        signal.push(0.30);
        let events = run(&mut detector, &signal);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].duration_frames, 2);

        let mut detector = BlinkDetector::new(config);
        let mut signal = vec![0.30];
        signal.extend(vec![0.10; 12]);
        signal.push(0.30);
        let events = run(&mut detector, &signal);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].duration_frames, 12);
    }

    #[test]
    fn test_multiple_blinks_in_stream() {
        let mut detector = BlinkDetector::default();
        let mut signal = Vec::new();
        for _ in 0..3 {
            signal.extend(vec![0.32; 6]);
            signal.extend(vec![0.12; 3]);
        }
        signal.extend(vec![0.32; 6]);

        let events = run(&mut detector, &signal);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_threshold_is_strict_less_than() {
        // EAR exactly at threshold counts as open
        let mut detector = BlinkDetector::default();
        let events = run(&mut detector, &[0.30, 0.21, 0.21, 0.21, 0.30]);
        assert!(events.is_empty());
        assert_eq!(detector.state(), BlinkState::Open);
    }

    #[test]
    fn test_reset_discards_in_progress_excursion() {
        let mut detector = BlinkDetector::default();
        detector.update(0.10, 0.0);
        detector.update(0.10, 0.033);
        assert_eq!(detector.state(), BlinkState::Closing);

        detector.reset();
        assert_eq!(detector.state(), BlinkState::Open);

        // Recovery right after reset must not emit a stale event
        assert!(detector.update(0.30, 0.066).is_none());
    }
}
