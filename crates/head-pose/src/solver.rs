//! Perspective-n-Point solver boundary
//!
//! The pose solve is a well-studied nonlinear optimization and is treated as
//! an external capability. Implementations wrap whatever robust solver the
//! deployment has available (OpenCV's iterative solver, a Lambda Twist
//! port, ...); the pipeline only depends on this contract.

use crate::camera::CameraIntrinsics;
use serde::{Deserialize, Serialize};

/// Result of a successful PnP solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PnpSolution {
    /// Rotation as a Rodrigues axis-angle vector
    pub rotation: [f64; 3],
    /// Translation in model units
    pub translation: [f64; 3],
}

/// External Perspective-n-Point solver.
///
/// Given N 3D model points, their N observed 2D image points, and the camera
/// intrinsics (distortion is zero by the camera model), returns the pose of
/// the model in camera space, or `None` when the solve does not converge.
/// Implementations must be deterministic: identical inputs yield identical
/// solutions.
pub trait PnpSolver {
    fn solve(
        &self,
        model_points: &[[f64; 3]],
        image_points: &[[f64; 2]],
        intrinsics: &CameraIntrinsics,
    ) -> Option<PnpSolution>;
}
