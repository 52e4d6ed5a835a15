//! Object detection post-processing for battlefield frame analysis.
//!
//! Takes a captured frame, prepares it for a single-class detection network,
//! decodes the raw output tensor into scored candidate boxes and suppresses
//! overlapping candidates into a final detection set. Inference itself is
//! reached through the [`session::InferenceSession`] boundary; an ONNX Runtime
//! backed session is available behind the `backend-ort` feature.

mod detector;
pub mod common;
pub mod error;
pub mod pipeline;
pub mod session;

use std::time::Instant;

pub use crate::common::{Detection, DetectorConfig, FieldFrame, ObjectClass, OutputLayout, Rect};
pub use crate::detector::{FieldDetector, FieldScan, ObjectOfInterest};
pub use crate::error::DetectError;
use crate::session::SessionRegistry;

pub type Result<T, E = DetectError> = std::result::Result<T, E>;

/// Builds a detector around the inference session registered under `session_name`.
///
/// The session must have been placed in the global [`SessionRegistry`]
/// beforehand; a missing registration is an inference-boundary failure.
pub fn init_detector(session_name: &str, config: DetectorConfig) -> Result<FieldDetector> {
    let session = SessionRegistry::global().get(session_name).ok_or_else(|| {
        DetectError::Inference(format!(
            "no inference session registered as '{session_name}'"
        ))
    })?;
    Ok(FieldDetector::new(session, config))
}

/// Runs one full analysis pass over `frame` with the default object filter.
pub fn run_detection(detector: &FieldDetector, frame: &FieldFrame) -> Result<Option<FieldScan>> {
    let now = Instant::now();

    let scan = detector.analyze(frame, ObjectOfInterest::default())?;

    log::debug!("processing time: {:?}", now.elapsed());

    Ok(scan)
}
