//! Drowsiness Feature Pipeline
//!
//! The per-frame orchestrator between an external face-landmark detector and
//! an external classifier. Each frame's landmarks become physically
//! meaningful scalars (eye aspect ratio, head pose angles), discrete blink
//! events, and a rolling temporal summary, assembled into a fixed-layout
//! model-input vector.

mod config;
mod features;
mod pipeline;

pub use config::PipelineConfig;
pub use features::{assemble_model_input, ModelInput, MODEL_INPUT_DIMENSION};
pub use pipeline::{FacialFeatureExtractor, FrameOutput};

use face_geometry::GeometryError;
use head_pose::PoseError;
use thiserror::Error;

/// Pipeline error types.
///
/// Only caller contract violations surface here. Degenerate geometry, PnP
/// solver failure, and undetected faces are recovered in-stream with
/// documented neutral defaults and never halt processing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Pose error: {0}")]
    Pose(#[from] PoseError),

    #[error("Landmark set has {actual} points, face mesh requires {required}")]
    IncompleteMesh { required: usize, actual: usize },
}
