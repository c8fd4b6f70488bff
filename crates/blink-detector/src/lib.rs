//! Blink Detection
//!
//! A two-state machine over the streaming eye aspect ratio. A blink is a
//! bounded excursion below threshold: EAR drops under the threshold, stays
//! there for a plausible number of frames, then recovers. Too-short
//! excursions are sensor noise; too-long ones are sustained closure
//! (microsleep territory) and belong to PERCLOS, not the blink count.

mod detector;

pub use detector::{BlinkConfig, BlinkDetector, BlinkEvent, BlinkState};
