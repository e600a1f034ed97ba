use crate::state_analysis::analysis_config::HeatmapConfig;
use crate::state_analysis::heatmap_mapper::PixelPoint;

use serde::Serialize;

/// Everything the rendering sink needs to draw the presence overlay.
///
/// # Fields
///
/// * `background` - Path of the background image to draw under the points.
/// * `extent` - Plot extent of the background: `[x_min, x_max, y_min, y_max]`.
/// * `points` - The projected pixel points with their rendering weights.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OverlayDocument {
    pub background: String,
    pub extent: [f64; 4],
    pub points: Vec<PixelPoint>,
}

impl OverlayDocument {
    /// Pairs projected points with the background and extent they belong to.
    pub fn new(points: Vec<PixelPoint>, config: &HeatmapConfig) -> Self {
        Self {
            background: config.background.clone(),
            extent: config.extent,
            points,
        }
    }
}
