mod registry;

#[cfg(feature = "backend-ort")]
mod ort_session;

pub use registry::SessionRegistry;

#[cfg(feature = "backend-ort")]
pub use ort_session::{InferenceDevice, ModelConfig, OrtSession};

use crate::Result;

/// Shape of a raw output tensor: `[batch, attributes, anchors]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputShape {
    pub batch: usize,
    pub attributes: usize,
    pub anchors: usize,
}

impl OutputShape {
    pub fn new(batch: usize, attributes: usize, anchors: usize) -> Self {
        Self {
            batch,
            attributes,
            anchors,
        }
    }

    pub fn element_count(&self) -> usize {
        self.batch * self.attributes * self.anchors
    }
}

/// Flat output buffer of one forward pass plus its shape descriptor.
#[derive(Debug, Clone)]
pub struct RawOutput {
    pub data: Vec<f32>,
    pub shape: OutputShape,
}

impl RawOutput {
    pub fn new(data: Vec<f32>, shape: OutputShape) -> Self {
        Self { data, shape }
    }
}

/// Boundary to the neural-network engine.
///
/// `run` executes one blocking forward pass over a planar float tensor of
/// shape `[batch, channels, width, height]`. Implementations must be safe
/// for concurrent read-only use; callers wanting throughput run independent
/// analysis calls on separate threads against a shared session handle.
///
/// Failures surface as [`crate::DetectError::Inference`] and are propagated
/// to the caller without retries.
pub trait InferenceSession: Send + Sync {
    fn run(&self, input: &[f32], shape: [usize; 4]) -> Result<RawOutput>;
}
