//! Model input assembly
//!
//! The classifier consumes a fixed 10-element vector per frame. Layout and
//! normalization constants are part of the model contract and are not
//! configurable; a consumer trained against this layout depends on the
//! exact order below.

use face_geometry::FacialFeatures;
use temporal_features::TemporalSummary;

/// Number of elements in the model input vector
pub const MODEL_INPUT_DIMENSION: usize = 10;

/// Angles are scaled by 1/90 into roughly [-1, 1]
const ANGLE_SCALE: f64 = 90.0;

/// Blink rate is scaled by 1/30 (blinks per minute)
const BLINK_RATE_SCALE: f64 = 30.0;

/// Eyes-closed indicator threshold, shared with the blink/PERCLOS constant
const EYES_CLOSED_THRESHOLD: f64 = 0.21;

/// Per-frame model input vector
pub type ModelInput = [f64; MODEL_INPUT_DIMENSION];

/// Assemble the model input from a frame snapshot and the rolling summary.
///
/// Layout: `[average_ear, yaw/90, pitch/90, roll/90, eyes_closed,
/// ear_mean, ear_std, ear_derivative, perclos, blink_rate/30]`.
pub fn assemble_model_input(features: &FacialFeatures, summary: &TemporalSummary) -> ModelInput {
    let eyes_closed = if features.average_ear < EYES_CLOSED_THRESHOLD {
        1.0
    } else {
        0.0
    };

    [
        features.average_ear,
        features.yaw / ANGLE_SCALE,
        features.pitch / ANGLE_SCALE,
        features.roll / ANGLE_SCALE,
        eyes_closed,
        summary.ear_mean,
        summary.ear_std,
        summary.ear_derivative,
        summary.perclos,
        summary.blink_rate / BLINK_RATE_SCALE,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_and_scaling() {
        let features = FacialFeatures {
            left_ear: 0.31,
            right_ear: 0.29,
            average_ear: 0.30,
            yaw: 45.0,
            pitch: -9.0,
            roll: 18.0,
            face_detected: true,
            confidence: 0.9,
            timestamp: 1.0,
        };
        let summary = TemporalSummary {
            ear_mean: 0.28,
            ear_std: 0.02,
            ear_derivative: -0.01,
            perclos: 0.1,
            blink_rate: 15.0,
        };

        let input = assemble_model_input(&features, &summary);
        assert_eq!(input.len(), MODEL_INPUT_DIMENSION);
        assert_eq!(input[0], 0.30);
        assert!((input[1] - 0.5).abs() < 1e-12);
        assert!((input[2] + 0.1).abs() < 1e-12);
        assert!((input[3] - 0.2).abs() < 1e-12);
        assert_eq!(input[4], 0.0); // eyes open at 0.30
        assert_eq!(input[5], 0.28);
        assert_eq!(input[6], 0.02);
        assert_eq!(input[7], -0.01);
        assert_eq!(input[8], 0.1);
        assert!((input[9] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_serializes() {
        // Downstream loggers persist frame snapshots as JSON
        let features = FacialFeatures {
            average_ear: 0.27,
            face_detected: true,
            confidence: 0.9,
            timestamp: 3.2,
            ..Default::default()
        };
        let json = serde_json::to_string(&features).unwrap();
        let back: FacialFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(back.average_ear, 0.27);
        assert!(back.face_detected);
    }

    #[test]
    fn test_eyes_closed_indicator() {
        let mut features = FacialFeatures {
            average_ear: 0.10,
            ..Default::default()
        };
        let summary = TemporalSummary::warm_start();

        assert_eq!(assemble_model_input(&features, &summary)[4], 1.0);

        // Exactly at threshold counts as open
        features.average_ear = 0.21;
        assert_eq!(assemble_model_input(&features, &summary)[4], 0.0);
    }
}
