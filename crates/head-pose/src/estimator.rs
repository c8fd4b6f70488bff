//! Head pose estimator

use crate::camera::CameraIntrinsics;
use crate::euler::{euler_from_projection, rodrigues};
use crate::solver::PnpSolver;
use crate::PoseError;
use face_geometry::LandmarkPoint;
use ndarray::{concatenate, Array2, Axis};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Generic 3D face model points, millimeter scale.
///
/// Order: nose tip, chin, left eye outer corner, right eye outer corner,
/// left mouth corner, right mouth corner.
pub const MODEL_POINTS: [[f64; 3]; 6] = [
    [0.0, 0.0, 0.0],
    [0.0, -330.0, -65.0],
    [-225.0, 170.0, -135.0],
    [225.0, 170.0, -135.0],
    [-150.0, -150.0, -125.0],
    [150.0, -150.0, -125.0],
];

/// MediaPipe Face Mesh indices matching `MODEL_POINTS`, same order
pub const POSE_LANDMARK_INDICES: [usize; 6] = [1, 152, 33, 263, 61, 291];

/// Head orientation as Euler angles in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadPose {
    /// Rotation about the vertical axis (left-right)
    pub yaw: f64,
    /// Rotation about the lateral axis (up-down)
    pub pitch: f64,
    /// Rotation about the longitudinal axis (side tilt)
    pub roll: f64,
}

/// Estimates head pose from a full face mesh.
///
/// Projects six normalized landmarks into pixel space and delegates the pose
/// solve to the configured [`PnpSolver`]. A failed solve degrades to the
/// neutral pose rather than an error: a single unsolvable frame must not
/// interrupt a real-time stream.
pub struct HeadPoseEstimator<S> {
    solver: S,
    intrinsics: CameraIntrinsics,
    frame_width: f64,
    frame_height: f64,
}

impl<S: PnpSolver> HeadPoseEstimator<S> {
    /// Create an estimator for frames of the given pixel dimensions.
    pub fn new(solver: S, frame_width: u32, frame_height: u32) -> Self {
        Self {
            solver,
            intrinsics: CameraIntrinsics::from_frame(frame_width, frame_height),
            frame_width: frame_width as f64,
            frame_height: frame_height as f64,
        }
    }

    /// Camera intrinsics in use
    pub fn intrinsics(&self) -> &CameraIntrinsics {
        &self.intrinsics
    }

    /// Estimate (yaw, pitch, roll) from a full per-frame landmark set.
    ///
    /// Fails only when the landmark set cannot supply the six pose indices
    /// (a caller contract violation). Solver non-convergence is not an
    /// error; it yields the neutral pose.
    pub fn estimate(&self, landmarks: &[LandmarkPoint]) -> Result<HeadPose, PoseError> {
        let mut image_points = [[0.0f64; 2]; 6];
        for (point, &index) in image_points.iter_mut().zip(POSE_LANDMARK_INDICES.iter()) {
            let lm = landmarks
                .get(index)
                .ok_or(PoseError::InsufficientLandmarks {
                    required: index,
                    available: landmarks.len(),
                })?;
            *point = [lm.x * self.frame_width, lm.y * self.frame_height];
        }

        let solution = match self.solver.solve(&MODEL_POINTS, &image_points, &self.intrinsics) {
            Some(solution) => solution,
            None => {
                warn!("PnP solve failed, reporting neutral head pose");
                return Ok(HeadPose::default());
            }
        };

        let rotation = rodrigues(solution.rotation);
        let translation = Array2::from_shape_fn((3, 1), |(i, _)| solution.translation[i]);
        let projection = concatenate![Axis(1), rotation, translation];

        let (yaw, pitch, roll) = euler_from_projection(&projection);
        Ok(HeadPose { yaw, pitch, roll })
    }
}
