use field_detect::error::DetectError;
use field_detect::session::{InferenceSession, OutputShape, RawOutput};
use field_detect::Result;

/// Canned-output session for driving the pipeline without a model file or a
/// runtime installation.
pub struct StubSession {
    output: RawOutput,
}

impl StubSession {
    pub fn new(attributes: usize, anchors: usize, data: Vec<f32>) -> Self {
        Self {
            output: RawOutput::new(data, OutputShape::new(1, attributes, anchors)),
        }
    }

    /// Builds the single-class row-major tensor from network-space
    /// `(center_x, center_y, width, height, confidence)` anchors.
    pub fn from_anchors(anchors: &[(f32, f32, f32, f32, f32)]) -> Self {
        let n = anchors.len();
        let mut data = vec![0.0f32; 5 * n];
        for (i, &(cx, cy, w, h, conf)) in anchors.iter().enumerate() {
            data[i] = cx;
            data[n + i] = cy;
            data[2 * n + i] = w;
            data[3 * n + i] = h;
            data[4 * n + i] = conf;
        }
        Self::new(5, n, data)
    }
}

impl InferenceSession for StubSession {
    fn run(&self, input: &[f32], shape: [usize; 4]) -> Result<RawOutput> {
        assert_eq!(
            input.len(),
            shape.iter().product::<usize>(),
            "input buffer does not match its declared shape"
        );
        Ok(self.output.clone())
    }
}

/// Session that always fails, for checking error propagation.
pub struct FailingSession;

impl InferenceSession for FailingSession {
    fn run(&self, _input: &[f32], _shape: [usize; 4]) -> Result<RawOutput> {
        Err(DetectError::Inference("session exploded".to_string()))
    }
}
