use serde::{Deserialize, Serialize};

use crate::common::Rect;

/// Category of a detected object.
///
/// The deployed model emits a single confidence channel, so every in-range
/// class index maps to [`ObjectClass::Operator`].
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectClass {
    #[default]
    Operator,
    Unknown,
}

impl ObjectClass {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => ObjectClass::Operator,
            _ => ObjectClass::Unknown,
        }
    }
}

/// One scored box, both as a pre-suppression candidate and as a final result.
///
/// Suppression zeroes `score` on eliminated candidates; anything that makes
/// it into a returned scan kept its original confidence.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub rect: Rect,
    pub score: f32,
    pub class_id: usize,
    pub cls: ObjectClass,
}

impl Detection {
    pub fn new(rect: Rect, score: f32, class_id: usize) -> Self {
        Self {
            rect,
            score,
            class_id,
            cls: ObjectClass::from_index(class_id),
        }
    }

    /// Sets the bounding rectangle.
    ///
    /// # Arguments
    ///
    /// * `rect` - The box in original-image pixel coordinates.
    ///
    /// # Returns
    ///
    /// The updated detection.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Sets the confidence score.
    ///
    /// # Arguments
    ///
    /// * `score` - The confidence score to be set.
    ///
    /// # Returns
    ///
    /// The updated detection.
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Sets the class index and the derived category.
    pub fn with_class_id(mut self, class_id: usize) -> Self {
        self.class_id = class_id;
        self.cls = ObjectClass::from_index(class_id);
        self
    }

    /// Intersection area with another detection's box.
    pub fn intersect_area(&self, other: &Detection) -> i64 {
        self.rect.intersect_area(&other.rect)
    }
}
