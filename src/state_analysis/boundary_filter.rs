use crate::frame_ingestion::frame_set::{AugmentedFrame, AugmentedFrameSet};

/// The watched spatial region: the axis-aligned bounding box of a set of 2-D
/// vertices, plus an inclusive vertical band.
///
/// The box is a deliberate approximation of the polygon spanned by the
/// vertices and is a strict superset of the polygon interior. The vertex list
/// is retained so a polygon-containment test could be added without changing
/// the construction API, but containment tests only the box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRegion {
    vertices: Vec<[f64; 2]>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    z_band: [f64; 2],
}

impl BoundaryRegion {
    /// Builds a region from its vertices and vertical band.
    ///
    /// The x and y bounds are computed once here, so repeated containment
    /// checks never recompute them.
    ///
    /// # Arguments
    ///
    /// * `vertices` - The 2-D outline vertices of the region.
    /// * `z_band` - Inclusive `[lower, upper]` vertical bounds.
    pub fn new(vertices: Vec<[f64; 2]>, z_band: [f64; 2]) -> Self {
        let x_bounds = axis_bounds(&vertices, 0);
        let y_bounds = axis_bounds(&vertices, 1);

        Self {
            vertices,
            x_bounds,
            y_bounds,
            z_band,
        }
    }

    /// The vertices the region was built from.
    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    /// Whether the position lies inside the region, all bounds inclusive.
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        x >= self.x_bounds[0]
            && x <= self.x_bounds[1]
            && y >= self.y_bounds[0]
            && y <= self.y_bounds[1]
            && z >= self.z_band[0]
            && z <= self.z_band[1]
    }
}

/// Min/max of one coordinate axis over the vertex list.
///
/// An empty vertex list yields an inverted interval, so the region contains
/// nothing.
fn axis_bounds(vertices: &[[f64; 2]], axis: usize) -> [f64; 2] {
    vertices.iter().fold(
        [f64::INFINITY, f64::NEG_INFINITY],
        |[lower, upper], vertex| [lower.min(vertex[axis]), upper.max(vertex[axis])],
    )
}

/// Selects the frames whose position lies inside the region.
///
/// Pure and order-preserving; filtering an already-filtered subset with the
/// same region returns the same subset.
///
/// # Arguments
///
/// * `frames` - The augmented frame set to filter.
/// * `region` - The region to test against.
///
/// # Returns
///
/// The matching frames in recording order; empty when nothing matches.
pub fn filter_by_boundary<'a>(
    frames: &'a AugmentedFrameSet,
    region: &BoundaryRegion,
) -> Vec<&'a AugmentedFrame> {
    frames
        .frames()
        .iter()
        .filter(|augmented| {
            let frame = &augmented.frame;
            region.contains(frame.x, frame.y, frame.z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_ingestion::frame::{Frame, Side};
    use crate::frame_ingestion::frame_set::RawFrameSet;
    use crate::state_analysis::analysis_config::defaults;
    use proptest::prelude::*;

    fn region() -> BoundaryRegion {
        BoundaryRegion::new(
            defaults::CHOKEPOINT_VERTICES.to_vec(),
            defaults::CHOKEPOINT_Z_BAND,
        )
    }

    fn frame_at(x: f64, y: f64, z: f64) -> Frame {
        Frame {
            tick: 1,
            round_num: 1,
            player: "Player5".to_owned(),
            team: "Team2".to_owned(),
            side: Side::T,
            x,
            y,
            z,
            area_name: None,
            clock_time: None,
            inventory: None,
        }
    }

    fn set_of(frames: Vec<Frame>) -> AugmentedFrameSet {
        RawFrameSet::new(frames).augment()
    }

    #[test]
    fn test_contains_inside_box_and_band() {
        assert!(region().contains(-2000.0, 500.0, 300.0));
    }

    #[test]
    fn test_excludes_above_vertical_band() {
        assert!(!region().contains(-2000.0, 500.0, 450.0));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let region = region();
        assert!(region.contains(-2806.0, 250.0, 285.0));
        assert!(region.contains(-1565.0, 1233.0, 421.0));
    }

    #[test]
    fn test_box_is_superset_of_polygon() {
        // (-2700, 1200) is outside the pentagon but inside its bounding box.
        assert!(region().contains(-2700.0, 1200.0, 300.0));
    }

    #[test]
    fn test_filter_preserves_order_and_drops_outsiders() {
        let frames = set_of(vec![
            frame_at(-2000.0, 500.0, 300.0),
            frame_at(0.0, 0.0, 0.0),
            frame_at(-1600.0, 600.0, 400.0),
        ]);
        let inside = filter_by_boundary(&frames, &region());

        assert_eq!(inside.len(), 2);
        assert_eq!(inside[0].frame.x, -2000.0);
        assert_eq!(inside[1].frame.x, -1600.0);
    }

    #[test]
    fn test_empty_vertex_list_matches_nothing() {
        let empty = BoundaryRegion::new(Vec::new(), [0.0, 100.0]);
        assert!(!empty.contains(0.0, 0.0, 50.0));
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(
            positions in prop::collection::vec((-3000.0..0.0f64, 0.0..1500.0f64, 200.0..500.0f64), 0..40)
        ) {
            let frames = set_of(positions.into_iter().map(|(x, y, z)| frame_at(x, y, z)).collect());
            let region = region();

            let once = filter_by_boundary(&frames, &region);
            let refiltered = RawFrameSet::new(
                once.iter().map(|augmented| augmented.frame.clone()).collect(),
            )
            .augment();
            let twice = filter_by_boundary(&refiltered, &region);

            prop_assert_eq!(once.len(), twice.len());
            for (first, second) in once.iter().zip(twice.iter()) {
                prop_assert_eq!(&first.frame, &second.frame);
            }
        }
    }
}
