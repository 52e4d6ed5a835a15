use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::common::{Detection, DetectorConfig, FieldFrame};
use crate::error::DetectError;
use crate::pipeline::{decode_output, prepare_frame, suppress};
use crate::session::InferenceSession;
use crate::Result;

/// Which object categories one analysis call should look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectOfInterest {
    pub operators: bool,
}

impl Default for ObjectOfInterest {
    fn default() -> Self {
        Self { operators: true }
    }
}

/// Per-category detections of one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldScan {
    pub object_of_interest: ObjectOfInterest,
    pub operators: Vec<Detection>,
}

impl FieldScan {
    fn new(object_of_interest: ObjectOfInterest) -> Self {
        Self {
            object_of_interest,
            operators: Vec::new(),
        }
    }

    /// True when no requested category produced a detection.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

/// One-shot frame analyzer: preprocess, infer, decode, suppress.
///
/// Holds no state across calls beyond the shared session handle, so a single
/// detector can serve concurrent analysis calls from separate threads.
pub struct FieldDetector {
    session: Arc<dyn InferenceSession>,
    config: DetectorConfig,
}

impl std::fmt::Debug for FieldDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDetector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FieldDetector {
    pub fn new(session: Arc<dyn InferenceSession>, config: DetectorConfig) -> Self {
        Self { session, config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Analyzes one frame, returning `None` when nothing was detected.
    ///
    /// An empty or zero-sized frame fails with
    /// [`DetectError::InvalidInput`] before inference is touched; anchors
    /// below the confidence threshold are simply absent from the result.
    pub fn analyze(
        &self,
        frame: &FieldFrame,
        object_of_interest: ObjectOfInterest,
    ) -> Result<Option<FieldScan>> {
        if frame.is_empty() {
            return Err(DetectError::InvalidInput(
                "cannot analyze an empty frame".to_string(),
            ));
        }

        let mut scan = FieldScan::new(object_of_interest);
        if object_of_interest.operators {
            scan.operators = self.analyze_operators(frame)?;
        }

        if scan.is_empty() {
            return Ok(None);
        }
        Ok(Some(scan))
    }

    fn analyze_operators(&self, frame: &FieldFrame) -> Result<Vec<Detection>> {
        let packed = prepare_frame(frame, self.config.input_size)?;
        let raw = self.session.run(&packed.tensor, packed.shape)?;

        let candidates = decode_output(
            &raw,
            &packed.scale,
            &self.config.layout,
            self.config.conf_threshold,
        )?;
        log::debug!(
            "{} of {} anchors cleared the confidence threshold",
            candidates.len(),
            raw.shape.anchors
        );

        let results = suppress(
            candidates,
            self.config.containment_threshold,
            self.config.score_floor,
        );
        log::debug!("{} operator detection(s) after suppression", results.len());

        Ok(results)
    }
}
