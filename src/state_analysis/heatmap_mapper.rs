use crate::frame_ingestion::frame::Side;
use crate::frame_ingestion::frame_set::AugmentedFrameSet;
use crate::state_analysis::analysis_config::HeatmapConfig;

use serde::Serialize;

/// One projected overlay point in pixel space.
///
/// # Fields
///
/// * `px`, `py` - Pixel coordinates on the background image.
/// * `weight` - Rendering weight of the point.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PixelPoint {
    pub px: f64,
    pub py: f64,
    pub weight: f64,
}

/// Projects the configured defending-side presence into pixel space.
///
/// The frame set is restricted to the configured team on the defending side
/// inside the configured area; each world position is mapped through the
/// affine transform `p = world * scale + offset`, per axis. The rendering
/// itself is the sink's responsibility.
///
/// # Arguments
///
/// * `frames` - The augmented frame set to project.
/// * `config` - The team, area, and transform coefficients.
///
/// # Returns
///
/// The projected points in recording order; empty when nothing matches.
pub fn project_overlay_points(frames: &AugmentedFrameSet, config: &HeatmapConfig) -> Vec<PixelPoint> {
    frames
        .frames()
        .iter()
        .filter(|augmented| {
            let frame = &augmented.frame;
            frame.team == config.team && frame.side == Side::Ct && frame.in_area(&config.area)
        })
        .map(|augmented| PixelPoint {
            px: augmented.frame.x * config.scale[0] + config.offset[0],
            py: augmented.frame.y * config.scale[1] + config.offset[1],
            weight: config.point_weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_ingestion::frame::Frame;
    use crate::frame_ingestion::frame_set::RawFrameSet;

    fn site_frame(team: &str, side: Side, area: Option<&str>, x: f64, y: f64) -> Frame {
        Frame {
            tick: 1,
            round_num: 1,
            player: "Player1".to_owned(),
            team: team.to_owned(),
            side,
            x,
            y,
            z: 0.0,
            area_name: area.map(str::to_owned),
            clock_time: None,
            inventory: None,
        }
    }

    #[test]
    fn test_origin_maps_to_fixed_offset() {
        let frames = RawFrameSet::new(vec![site_frame(
            "Team1",
            Side::Ct,
            Some("BombsiteB"),
            0.0,
            0.0,
        )])
        .augment();

        let points = project_overlay_points(&frames, &HeatmapConfig::default());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].px, -120.0);
        assert_eq!(points[0].py, 480.0);
        assert_eq!(points[0].weight, 0.25);
    }

    #[test]
    fn test_affine_transform_scales_then_offsets() {
        let frames = RawFrameSet::new(vec![site_frame(
            "Team1",
            Side::Ct,
            Some("BombsiteB"),
            -2000.0,
            1000.0,
        )])
        .augment();

        let points = project_overlay_points(&frames, &HeatmapConfig::default());
        assert_eq!(points[0].px, -2000.0 * 0.75 - 120.0);
        assert_eq!(points[0].py, 1000.0 * 0.60 + 480.0);
    }

    #[test]
    fn test_only_defending_side_in_area_is_projected() {
        let frames = RawFrameSet::new(vec![
            site_frame("Team1", Side::Ct, Some("BombsiteB"), 1.0, 1.0),
            site_frame("Team1", Side::T, Some("BombsiteB"), 2.0, 2.0),
            site_frame("Team2", Side::Ct, Some("BombsiteB"), 3.0, 3.0),
            site_frame("Team1", Side::Ct, Some("BombsiteA"), 4.0, 4.0),
            site_frame("Team1", Side::Ct, None, 5.0, 5.0),
        ])
        .augment();

        let points = project_overlay_points(&frames, &HeatmapConfig::default());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].px, 1.0 * 0.75 - 120.0);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let frames = RawFrameSet::new(Vec::new()).augment();
        assert!(project_overlay_points(&frames, &HeatmapConfig::default()).is_empty());
    }
}
