//! Temporal feature extractor

use crate::stats::{gradient, mean, std_dev};
use face_geometry::FacialFeatures;
use serde::{Deserialize, Serialize};
use sliding_window::SlidingWindow;
use tracing::warn;

/// Typical resting human blink rate, blinks per minute. Reported while no
/// blink evidence has accumulated: "nothing abnormal observed", not "zero
/// blinking observed".
const DEFAULT_BLINK_RATE: f64 = 17.0;

/// Temporal extractor configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TemporalConfig {
    /// EAR window capacity in samples (~1 s at 30 fps by default). This
    /// window is the temporal proxy for "recent" in the PERCLOS and
    /// statistics computations.
    pub window_size: usize,

    /// Blink timestamp window capacity
    pub blink_history: usize,

    /// EAR below this value counts as closed for PERCLOS
    pub perclos_threshold: f64,

    /// Blink-rate lookback, seconds before the most recent blink
    pub rate_window_secs: f64,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            window_size: 30,
            blink_history: 100,
            perclos_threshold: 0.21,
            rate_window_secs: 60.0,
        }
    }
}

/// Rolling summary of the recent EAR signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemporalSummary {
    /// Mean EAR over the window
    pub ear_mean: f64,

    /// Population standard deviation of EAR over the window
    pub ear_std: f64,

    /// Rate of change of EAR at the most recent sample
    pub ear_derivative: f64,

    /// Fraction of window samples below the closed threshold
    pub perclos: f64,

    /// Blinks per minute, over the minute ending at the latest blink
    pub blink_rate: f64,
}

impl TemporalSummary {
    /// Warm-start summary used while fewer than three samples exist: an
    /// alert prior (healthy open-eye mean, typical blink rate), not a
    /// missing-data error.
    pub fn warm_start() -> Self {
        Self {
            ear_mean: 0.30,
            ear_std: 0.0,
            ear_derivative: 0.0,
            perclos: 0.0,
            blink_rate: DEFAULT_BLINK_RATE,
        }
    }
}

/// Sliding-window temporal feature extractor.
///
/// Owns two bounded windows: recent average-EAR samples and recent blink
/// timestamps. One instance per subject/session, single-threaded; there is
/// no expiry beyond capacity eviction and the explicit blink-rate lookback.
/// A fresh instance represents a fresh session.
#[derive(Debug, Clone)]
pub struct TemporalFeatureExtractor {
    config: TemporalConfig,
    ear_window: SlidingWindow<f64>,
    blink_times: SlidingWindow<f64>,
}

impl TemporalFeatureExtractor {
    pub fn new(config: TemporalConfig) -> Self {
        Self {
            ear_window: SlidingWindow::with_capacity(config.window_size),
            blink_times: SlidingWindow::with_capacity(config.blink_history),
            config,
        }
    }

    /// Absorb one frame and return the refreshed summary.
    ///
    /// The frame's average EAR is clamped into [0, 1] before entering the
    /// window; values outside that range indicate upstream landmark
    /// corruption and must not silently reach the statistics.
    pub fn update(&mut self, features: &FacialFeatures) -> TemporalSummary {
        let ear = features.average_ear;
        if !(0.0..=1.0).contains(&ear) {
            warn!(ear, "clamping out-of-range EAR sample");
        }
        self.ear_window.push(ear.clamp(0.0, 1.0));

        if self.ear_window.len() < 3 {
            return TemporalSummary::warm_start();
        }

        let samples = self.ear_window.to_vec();
        let derivative = gradient(&samples).last().copied().unwrap_or(0.0);

        TemporalSummary {
            ear_mean: mean(&samples),
            ear_std: std_dev(&samples),
            ear_derivative: derivative,
            perclos: self.perclos(&samples),
            blink_rate: self.blink_rate(),
        }
    }

    /// Record a completed blink. Called by the orchestrator only when the
    /// blink detector emits a validated event.
    pub fn add_blink(&mut self, timestamp: f64) {
        self.blink_times.push(timestamp);
    }

    /// Clear both windows at a session boundary.
    pub fn reset(&mut self) {
        self.ear_window.clear();
        self.blink_times.clear();
    }

    /// Samples currently in the EAR window
    pub fn sample_count(&self) -> usize {
        self.ear_window.len()
    }

    /// Fraction of windowed samples with the eyes closed
    fn perclos(&self, samples: &[f64]) -> f64 {
        let closed = samples
            .iter()
            .filter(|&&ear| ear < self.config.perclos_threshold)
            .count();
        closed as f64 / samples.len() as f64
    }

    /// Blinks within the lookback window ending at the latest blink.
    /// Anchored to the last blink rather than "now" so the rate does not
    /// decay while the subject simply keeps their eyes open.
    fn blink_rate(&self) -> f64 {
        let latest = match self.blink_times.latest() {
            Some(&t) => t,
            None => return DEFAULT_BLINK_RATE,
        };
        let cutoff = latest - self.config.rate_window_secs;
        self.blink_times.iter().filter(|&&t| t > cutoff).count() as f64
    }
}

impl Default for TemporalFeatureExtractor {
    fn default() -> Self {
        Self::new(TemporalConfig::default())
    }
}
