//! Per-frame orchestrator

use crate::config::PipelineConfig;
use crate::features::{assemble_model_input, ModelInput};
use crate::PipelineError;
use blink_detector::{BlinkDetector, BlinkEvent};
use face_geometry::{
    calculate_ear, extract_eye_landmarks, FacialFeatures, LandmarkPoint, LEFT_EYE_INDICES,
    RIGHT_EYE_INDICES,
};
use head_pose::{HeadPoseEstimator, PnpSolver};
use temporal_features::{TemporalFeatureExtractor, TemporalSummary};
use tracing::debug;

/// MediaPipe Face Mesh point count; the landmark provider contract
pub const FACE_MESH_POINTS: usize = 468;

/// Detection confidence reported on every successful detection. The
/// upstream mesh gives no per-face score; this constant is a placeholder
/// until confidence-weighted fusion exists.
const DETECTION_CONFIDENCE: f64 = 0.9;

/// Everything the pipeline produces for one frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// Per-frame geometric snapshot
    pub features: FacialFeatures,

    /// Rolling temporal summary after absorbing this frame
    pub summary: TemporalSummary,

    /// Blink completed by this frame, if any
    pub blink: Option<BlinkEvent>,

    /// Fixed-layout classifier input
    pub model_input: ModelInput,
}

/// Per-frame facial feature pipeline.
///
/// One instance per subject/session. Processes one frame to completion
/// before the next; state is confined to the owning thread. Independent
/// sessions (batch video processing) each get their own instance with no
/// shared mutable state.
pub struct FacialFeatureExtractor<S> {
    config: PipelineConfig,
    pose_estimator: HeadPoseEstimator<S>,
    blink_detector: BlinkDetector,
    temporal: TemporalFeatureExtractor,
}

impl<S: PnpSolver> FacialFeatureExtractor<S> {
    pub fn new(config: PipelineConfig, solver: S) -> Self {
        Self {
            pose_estimator: HeadPoseEstimator::new(solver, config.frame_width, config.frame_height),
            blink_detector: BlinkDetector::new(config.blink),
            temporal: TemporalFeatureExtractor::new(config.temporal),
            config,
        }
    }

    /// Process one frame.
    ///
    /// `landmarks` is `None` when the upstream detector found no face. That
    /// is not an error: the frame yields a zeroed snapshot with
    /// `face_detected=false`, and the temporal window still absorbs it as an
    /// EAR=0 sample. (This registers occlusion as closure and biases PERCLOS
    /// while the face is away from the camera; preserved behavior, see
    /// DESIGN.md.)
    pub fn process_frame(
        &mut self,
        landmarks: Option<&[LandmarkPoint]>,
        timestamp: f64,
    ) -> Result<FrameOutput, PipelineError> {
        let landmarks = match landmarks {
            Some(points) => points,
            None => {
                debug!(timestamp, "no face detected");
                let features = FacialFeatures::absent(timestamp);
                let summary = self.temporal.update(&features);
                let model_input = assemble_model_input(&features, &summary);
                return Ok(FrameOutput {
                    features,
                    summary,
                    blink: None,
                    model_input,
                });
            }
        };

        if landmarks.len() < FACE_MESH_POINTS {
            return Err(PipelineError::IncompleteMesh {
                required: FACE_MESH_POINTS,
                actual: landmarks.len(),
            });
        }

        let left_eye = extract_eye_landmarks(landmarks, &LEFT_EYE_INDICES)?;
        let right_eye = extract_eye_landmarks(landmarks, &RIGHT_EYE_INDICES)?;
        let left_ear = calculate_ear(&left_eye)?;
        let right_ear = calculate_ear(&right_eye)?;
        let average_ear = (left_ear + right_ear) / 2.0;

        let pose = self.pose_estimator.estimate(landmarks)?;

        let features = FacialFeatures {
            left_ear,
            right_ear,
            average_ear,
            yaw: pose.yaw,
            pitch: pose.pitch,
            roll: pose.roll,
            face_detected: true,
            confidence: DETECTION_CONFIDENCE,
            timestamp,
        };

        let blink = self.blink_detector.update(average_ear, timestamp);
        if let Some(event) = &blink {
            debug!(
                duration_frames = event.duration_frames,
                timestamp, "blink completed"
            );
            self.temporal.add_blink(timestamp);
        }

        let summary = self.temporal.update(&features);
        let model_input = assemble_model_input(&features, &summary);

        Ok(FrameOutput {
            features,
            summary,
            blink,
            model_input,
        })
    }

    /// Reset all per-session state. The next frame starts a fresh session
    /// with warm-start temporal defaults.
    pub fn reset(&mut self) {
        self.blink_detector.reset();
        self.temporal.reset();
    }

    /// Session configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
