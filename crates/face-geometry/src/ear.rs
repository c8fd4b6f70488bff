//! Eye Aspect Ratio (EAR)
//!
//! EAR = (||p2-p6|| + ||p3-p5||) / (2 * ||p1-p4||)
//!
//! where p1..p6 are the six eye contour points in anatomical order: outer
//! corner, two upper-lid points, inner corner, two lower-lid points. Open
//! eyes sit around 0.2-0.4; the ratio collapses toward zero as the lids
//! close.

use crate::landmark::{euclidean_distance, LandmarkPoint};
use crate::GeometryError;

/// MediaPipe Face Mesh indices for the left eye contour
pub const LEFT_EYE_INDICES: [usize; 6] = [362, 385, 387, 263, 373, 380];

/// MediaPipe Face Mesh indices for the right eye contour
pub const RIGHT_EYE_INDICES: [usize; 6] = [33, 160, 158, 133, 153, 144];

/// Degenerate-geometry guard on the horizontal eye span
const MIN_HORIZONTAL_SPAN: f64 = 1e-6;

/// Compute the eye aspect ratio for a single eye.
///
/// Requires exactly six points in contour order. A horizontal span below
/// `MIN_HORIZONTAL_SPAN` signals a degenerate eye region (collapsed or
/// corrupted landmarks) and yields 0.0 rather than a division blow-up.
pub fn calculate_ear(eye: &[[f64; 2]]) -> Result<f64, GeometryError> {
    if eye.len() != 6 {
        return Err(GeometryError::InvalidLandmarkCount {
            expected: 6,
            actual: eye.len(),
        });
    }

    // Vertical lid distances (p2-p6, p3-p5)
    let v1 = euclidean_distance(eye[1], eye[5]);
    let v2 = euclidean_distance(eye[2], eye[4]);

    // Horizontal corner-to-corner distance (p1-p4)
    let h = euclidean_distance(eye[0], eye[3]);

    if h < MIN_HORIZONTAL_SPAN {
        return Ok(0.0);
    }

    Ok((v1 + v2) / (2.0 * h))
}

/// Pick the six eye contour points out of a full face mesh.
pub fn extract_eye_landmarks(
    landmarks: &[LandmarkPoint],
    indices: &[usize; 6],
) -> Result<[[f64; 2]; 6], GeometryError> {
    let mut eye = [[0.0; 2]; 6];
    for (slot, &index) in eye.iter_mut().zip(indices.iter()) {
        let point = landmarks
            .get(index)
            .ok_or(GeometryError::LandmarkIndexOutOfBounds {
                index,
                available: landmarks.len(),
            })?;
        *slot = point.xy();
    }
    Ok(eye)
}
