//! Pipeline configuration

use blink_detector::BlinkConfig;
use serde::{Deserialize, Serialize};
use temporal_features::TemporalConfig;

/// Configuration for one pipeline session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Frame width in pixels, fixed for the session
    pub frame_width: u32,

    /// Frame height in pixels, fixed for the session
    pub frame_height: u32,

    /// Blink detector tuning
    pub blink: BlinkConfig,

    /// Temporal window tuning
    pub temporal: TemporalConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            frame_width: 640,
            frame_height: 480,
            blink: BlinkConfig::default(),
            temporal: TemporalConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Config for a given capture resolution, defaults elsewhere.
    pub fn for_resolution(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            ..Default::default()
        }
    }
}
