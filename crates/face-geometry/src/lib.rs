//! Facial Geometry
//!
//! Pure geometric primitives for the drowsiness feature pipeline:
//! - Normalized facial landmark points
//! - Eye Aspect Ratio (EAR) from six-point eye contours
//! - The per-frame `FacialFeatures` snapshot consumed downstream

mod ear;
mod landmark;

pub use ear::{calculate_ear, extract_eye_landmarks, LEFT_EYE_INDICES, RIGHT_EYE_INDICES};
pub use landmark::{euclidean_distance, FacialFeatures, LandmarkPoint};

use thiserror::Error;

/// Geometry error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Expected {expected} eye landmarks, got {actual}")]
    InvalidLandmarkCount { expected: usize, actual: usize },

    #[error("Landmark index {index} out of bounds for mesh of {available} points")]
    LandmarkIndexOutOfBounds { index: usize, available: usize },
}
