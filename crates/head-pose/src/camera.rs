//! Pinhole camera model

use ndarray::{array, Array2};
use serde::{Deserialize, Serialize};

/// Pinhole camera intrinsics with zero lens distortion.
///
/// The focal length is approximated by the frame width and the principal
/// point by the image center, which is adequate for consumer webcams at the
/// angular precision this pipeline needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Focal length in pixels
    pub focal_length: f64,
    /// Principal point (cx, cy) in pixels
    pub center: (f64, f64),
}

impl CameraIntrinsics {
    /// Build intrinsics for a frame of the given pixel dimensions.
    pub fn from_frame(width: u32, height: u32) -> Self {
        Self {
            focal_length: width as f64,
            center: (width as f64 / 2.0, height as f64 / 2.0),
        }
    }

    /// The 3x3 intrinsic matrix K.
    pub fn matrix(&self) -> Array2<f64> {
        array![
            [self.focal_length, 0.0, self.center.0],
            [0.0, self.focal_length, self.center.1],
            [0.0, 0.0, 1.0],
        ]
    }

    /// Lens distortion coefficients: all zero by model assumption.
    pub fn dist_coeffs(&self) -> [f64; 4] {
        [0.0; 4]
    }
}
