use ort::{CPUExecutionProvider, CUDAExecutionProvider, TensorRTExecutionProvider};
use ort::Session;
use ort::Tensor;

use crate::error::DetectError;
use crate::session::{InferenceSession, OutputShape, RawOutput};
use crate::Result;

/// Execution provider selection for the ONNX Runtime session.
#[derive(Debug, Default, Clone, Copy)]
pub enum InferenceDevice {
    #[default]
    Cpu,
    Cuda(i32),
    TensorRt(i32),
}

impl InferenceDevice {
    pub fn str(&self) -> &'static str {
        match self {
            InferenceDevice::Cpu => "CPU",
            InferenceDevice::Cuda(_) => "CUDA",
            InferenceDevice::TensorRt(_) => "TensorRT",
        }
    }
}

/// Where to find the model weights and the runtime library.
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    pub weights_path: String,
    pub ort_lib_path: String,
    pub device: InferenceDevice,
}

/// ONNX Runtime backed [`InferenceSession`].
///
/// The runtime library is loaded dynamically from `ort_lib_path`, so the
/// crate builds without ONNX Runtime installed.
pub struct OrtSession {
    session: Session,
    input_name: String,
    output_name: String,
}

impl OrtSession {
    pub fn load(config: &ModelConfig) -> Result<Self> {
        ort::init_from(&config.ort_lib_path).commit()?;

        let execution_provider = match config.device {
            InferenceDevice::Cpu => CPUExecutionProvider::default().build(),
            InferenceDevice::Cuda(device_id) => CUDAExecutionProvider::default()
                .with_device_id(device_id)
                .build(),
            InferenceDevice::TensorRt(device_id) => TensorRTExecutionProvider::default()
                .with_device_id(device_id)
                .build(),
        };
        log::info!(
            "initializing ORT session with ({}) execution provider",
            config.device.str()
        );

        let session = Session::builder()?
            .with_execution_providers([execution_provider])?
            .commit_from_file(&config.weights_path)?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| DetectError::Inference("model declares no inputs".to_string()))?;
        let output_name = session
            .outputs
            .first()
            .map(|output| output.name.clone())
            .ok_or_else(|| DetectError::Inference("model declares no outputs".to_string()))?;

        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }
}

impl InferenceSession for OrtSession {
    fn run(&self, input: &[f32], shape: [usize; 4]) -> Result<RawOutput> {
        let tensor = Tensor::from_array((shape, input.to_vec()))?;
        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => tensor]?)?;

        let (dims, data) = outputs[self.output_name.as_str()].try_extract_raw_tensor::<f32>()?;
        if dims.len() != 3 {
            return Err(DetectError::MalformedOutput(format!(
                "expected a rank-3 output tensor, model emitted rank {}",
                dims.len()
            )));
        }

        Ok(RawOutput::new(
            data.to_vec(),
            OutputShape::new(dims[0] as usize, dims[1] as usize, dims[2] as usize),
        ))
    }
}
