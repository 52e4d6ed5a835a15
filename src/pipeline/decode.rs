//! Raw output interpretation.

use ndarray::ArrayView2;

use crate::common::{Detection, OutputLayout, Rect};
use crate::error::DetectError;
use crate::pipeline::preprocess::ScaleFactors;
use crate::session::RawOutput;
use crate::Result;

/// Decodes a raw output tensor into unsuppressed candidates.
///
/// The tensor layout is not documented by the model and was worked out from
/// the shape alone: one row per attribute, one column per anchor, with all
/// center_x values first, then center_y, width, height and the class scores.
/// Candidates are emitted in anchor-index order with no semantic ordering.
pub fn decode_output(
    raw: &RawOutput,
    scale: &ScaleFactors,
    layout: &OutputLayout,
    conf_threshold: f32,
) -> Result<Vec<Detection>> {
    let shape = raw.shape;
    if shape.batch != 1 {
        return Err(DetectError::MalformedOutput(format!(
            "unsupported batch size {}",
            shape.batch
        )));
    }
    if shape.attributes < layout.attributes() {
        return Err(DetectError::MalformedOutput(format!(
            "expected at least {} attribute rows, model emitted {}",
            layout.attributes(),
            shape.attributes
        )));
    }
    if shape.anchors == 0 {
        return Err(DetectError::MalformedOutput(
            "output carries no anchor columns".to_string(),
        ));
    }
    if raw.data.len() != shape.element_count() {
        return Err(DetectError::MalformedOutput(format!(
            "output buffer holds {} values, shape requires {}",
            raw.data.len(),
            shape.element_count()
        )));
    }

    let rows = ArrayView2::from_shape((shape.attributes, shape.anchors), raw.data.as_slice())
        .map_err(|err| DetectError::MalformedOutput(err.to_string()))?;

    let mut candidates = Vec::new();
    for i in 0..shape.anchors {
        let mut class_id = 0usize;
        let mut score = f32::NEG_INFINITY;
        for (index, row) in layout.class_rows().enumerate() {
            let value = rows[[row, i]];
            if value > score {
                class_id = index;
                score = value;
            }
        }

        if score < conf_threshold {
            continue;
        }

        // Coordinates were scaled up during preprocessing; the inverse
        // mapping is division. Truncation toward zero matches the integer
        // pixel contract.
        let center_x = (rows[[0, i]] as f64 / scale.x) as i32;
        let center_y = (rows[[1, i]] as f64 / scale.y) as i32;
        let w = (rows[[2, i]] as f64 / scale.x) as i32;
        let h = (rows[[3, i]] as f64 / scale.y) as i32;

        let rect = Rect::new(center_x - w / 2, center_y - h / 2, w, h);
        candidates.push(Detection::new(rect, score, class_id));
    }

    Ok(candidates)
}
