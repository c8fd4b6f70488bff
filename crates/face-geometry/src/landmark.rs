//! Landmark points and the per-frame feature snapshot

use serde::{Deserialize, Serialize};

/// A single facial landmark in normalized image coordinates.
///
/// `x` and `y` are in [0, 1] relative to the frame; `z` is relative depth in
/// the same scale as `x`, negative toward the camera. Produced by an external
/// landmark detector and never mutated after receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LandmarkPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project onto the image plane, dropping depth
    pub fn xy(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Euclidean distance between two 2D points
pub fn euclidean_distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

/// Facial features extracted from a single frame.
///
/// Built once per frame by the pipeline and never mutated afterwards. When
/// `face_detected` is false all geometric fields are zero and downstream
/// consumers must treat the frame as a gap, not a measurement.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FacialFeatures {
    /// Left eye aspect ratio
    pub left_ear: f64,

    /// Right eye aspect ratio
    pub right_ear: f64,

    /// Mean of left and right EAR
    pub average_ear: f64,

    /// Head yaw in degrees
    pub yaw: f64,

    /// Head pitch in degrees
    pub pitch: f64,

    /// Head roll in degrees
    pub roll: f64,

    /// Whether a face was detected this frame
    pub face_detected: bool,

    /// Detection confidence (0-1)
    pub confidence: f64,

    /// Frame timestamp in monotonic seconds
    pub timestamp: f64,
}

impl FacialFeatures {
    /// Snapshot for a frame with no detected face: zeroed geometry,
    /// zero confidence.
    pub fn absent(timestamp: f64) -> Self {
        Self {
            timestamp,
            ..Default::default()
        }
    }
}
