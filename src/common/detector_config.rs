use crate::common::OutputLayout;

/// Tuning knobs for one detector instance.
///
/// The defaults reproduce the deployed operator model: a 640x640 network
/// input, a 0.3 confidence cut for anchors, a 0.1 score floor re-checked
/// during suppression and a 0.7 containment ratio for eliminating boxes
/// nested inside higher-scoring ones.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub input_size: u32,
    pub conf_threshold: f32,
    pub score_floor: f32,
    pub containment_threshold: f32,
    pub layout: OutputLayout,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            input_size: 640,
            conf_threshold: 0.3,
            score_floor: 0.1,
            containment_threshold: 0.7,
            layout: OutputLayout::default(),
        }
    }
}

impl DetectorConfig {
    pub fn with_input_size(mut self, input_size: u32) -> Self {
        self.input_size = input_size;
        self
    }

    pub fn with_conf_threshold(mut self, conf_threshold: f32) -> Self {
        self.conf_threshold = conf_threshold;
        self
    }

    pub fn with_containment_threshold(mut self, containment_threshold: f32) -> Self {
        self.containment_threshold = containment_threshold;
        self
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }
}
