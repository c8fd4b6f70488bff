//! Head Pose Estimation
//!
//! Recovers head orientation (yaw, pitch, roll) from six facial landmarks
//! using a generic 3D face model and a pinhole camera. The nonlinear
//! Perspective-n-Point solve itself is delegated to an external solver
//! behind the [`PnpSolver`] trait; this crate owns the camera model, the
//! 2D/3D correspondences, and the rotation-to-Euler decomposition.

mod camera;
mod estimator;
mod euler;
mod solver;

pub use camera::CameraIntrinsics;
pub use estimator::{HeadPose, HeadPoseEstimator, MODEL_POINTS, POSE_LANDMARK_INDICES};
pub use euler::{euler_from_projection, rodrigues};
pub use solver::{PnpSolution, PnpSolver};

use thiserror::Error;

/// Head pose error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoseError {
    #[error("Landmark set too small for pose estimation: need index {required}, got {available} points")]
    InsufficientLandmarks { required: usize, available: usize },
}
