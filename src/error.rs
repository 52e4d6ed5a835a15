use thiserror::Error;

/// Failures surfaced by the detection pipeline.
///
/// Below-threshold anchors and empty final detection sets are not errors;
/// they simply produce an empty or absent result.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The input image violated a local precondition (empty, zero-sized).
    /// Raised before inference is ever touched.
    #[error("invalid input image: {0}")]
    InvalidInput(String),

    /// The inference backend failed. Propagated unchanged, never retried here.
    #[error("inference failed: {0}")]
    Inference(String),

    /// The output tensor does not match the expected attribute layout.
    /// Indicates a model contract mismatch, not a transient condition.
    #[error("malformed model output: {0}")]
    MalformedOutput(String),
}

#[cfg(feature = "backend-ort")]
impl From<ort::Error> for DetectError {
    fn from(err: ort::Error) -> Self {
        DetectError::Inference(err.to_string())
    }
}
