pub mod decode;
pub mod nms;
pub mod preprocess;

pub use decode::decode_output;
pub use nms::suppress;
pub use preprocess::{pack_planar, prepare_frame, PackedInput, ScaleFactors};
