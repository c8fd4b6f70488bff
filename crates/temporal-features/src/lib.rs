//! Temporal Feature Extraction
//!
//! Maintains bounded sliding windows over the per-frame EAR signal and blink
//! timestamps, and summarizes them on demand: mean, spread, closing speed,
//! PERCLOS, and blink rate. One extractor instance per subject/session.

mod extractor;
mod stats;

pub use extractor::{TemporalConfig, TemporalFeatureExtractor, TemporalSummary};
pub use stats::{gradient, mean, std_dev};
