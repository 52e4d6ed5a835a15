use std::ops::Range;

/// Attribute-row layout of the raw output tensor.
///
/// The tensor is row-major over attributes with one column per anchor:
/// `coord_rows` coordinate rows (center_x, center_y, width, height) followed
/// by one score row per class. The deployed model emits a single class, so
/// the default layout expects five rows and reads confidence from the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
    pub coord_rows: usize,
    pub classes: usize,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            coord_rows: 4,
            classes: 1,
        }
    }
}

impl OutputLayout {
    /// Layout of the single-class operator model.
    pub fn single_class() -> Self {
        Self::default()
    }

    /// Layout with `classes` score rows after the four coordinate rows.
    pub fn with_classes(classes: usize) -> Self {
        Self {
            coord_rows: 4,
            classes,
        }
    }

    /// Minimum attribute-row count a conforming output must carry.
    pub fn attributes(&self) -> usize {
        self.coord_rows + self.classes
    }

    /// Row indices holding per-class scores.
    pub fn class_rows(&self) -> Range<usize> {
        self.coord_rows..self.coord_rows + self.classes
    }
}
