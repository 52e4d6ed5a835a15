//! Frame preparation for the detection network.

use fast_image_resize::images::Image as FirImage;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbImage;

use crate::common::FieldFrame;
use crate::error::DetectError;
use crate::Result;

/// Per-axis ratio of network input size to original image size.
///
/// Coordinates in network space map back to image space by division, since
/// the frame was scaled up by these factors on the way in. Valid for the
/// single analysis call that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    pub fn new(input_size: u32, img_width: u32, img_height: u32) -> Self {
        Self {
            x: input_size as f64 / img_width as f64,
            y: input_size as f64 / img_height as f64,
        }
    }
}

/// A frame resized and packed for inference.
#[derive(Debug, Clone)]
pub struct PackedInput {
    /// Planar channel-major tensor data, normalized to `[0, 1]`.
    pub tensor: Vec<f32>,
    /// `[batch, channels, width, height]`
    pub shape: [usize; 4],
    pub scale: ScaleFactors,
}

/// Resizes `frame` to the network's square input and packs it channel-major.
pub fn prepare_frame(frame: &FieldFrame, input_size: u32) -> Result<PackedInput> {
    let (img_width, img_height) = frame.dimensions();
    if img_width == 0 || img_height == 0 {
        return Err(DetectError::InvalidInput(format!(
            "cannot analyze a {img_width}x{img_height} image"
        )));
    }

    let scale = ScaleFactors::new(input_size, img_width, img_height);
    let resized = resize_area(&frame.image, input_size)?;
    let tensor = pack_planar(&resized);

    Ok(PackedInput {
        tensor,
        shape: [1, 3, input_size as usize, input_size as usize],
        scale,
    })
}

/// Area-averaging resize to a square `size` x `size` image.
fn resize_area(image: &RgbImage, size: u32) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    let src = FirImage::from_vec_u8(width, height, image.as_raw().clone(), PixelType::U8x3)
        .map_err(|err| DetectError::InvalidInput(err.to_string()))?;

    let mut dst = FirImage::new(size, size, PixelType::U8x3);
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box));

    let mut resizer = Resizer::new();
    match resizer.resize(&src, &mut dst, &options) {
        Ok(()) => RgbImage::from_raw(size, size, dst.buffer().to_vec()).ok_or_else(|| {
            DetectError::InvalidInput("resized buffer has unexpected size".to_string())
        }),
        Err(err) => {
            log::warn!("failed to use `fast_image_resize` ({err}), falling back");
            Ok(image::imageops::resize(
                image,
                size,
                size,
                image::imageops::FilterType::Triangle,
            ))
        }
    }
}

/// Repacks interleaved RGB into one contiguous block per channel.
///
/// The network expects planar input, so pixel `i` lands at offset `i` of its
/// channel block rather than at `3 * i`.
pub fn pack_planar(image: &RgbImage) -> Vec<f32> {
    let buf = image.as_raw();
    let hw = (image.width() * image.height()) as usize;

    let mut out = vec![0.0f32; hw * 3];
    for i in 0..hw {
        out[i] = buf[3 * i] as f32 / 255.0;
        out[i + hw] = buf[3 * i + 1] as f32 / 255.0;
        out[i + 2 * hw] = buf[3 * i + 2] as f32 / 255.0;
    }

    out
}
