use crate::frame_ingestion::frame::Side;
use crate::frame_ingestion::frame_set::AugmentedFrameSet;
use crate::state_analysis::boundary_filter::{filter_by_boundary, BoundaryRegion};

use std::collections::HashSet;

/// Counts how often the team's attacking side is observed inside the region.
///
/// The boundary subset is restricted to frames with the given team on the
/// attacking side, then grouped by (player, tick): several frames of the same
/// player at the same tick count as one entry.
///
/// # Arguments
///
/// * `frames` - The augmented frame set to measure.
/// * `region` - The watched spatial region.
/// * `team_name` - The team whose attacking side is counted.
///
/// # Returns
///
/// The number of distinct (player, tick) observations; 0 when the team never
/// appears inside the region.
pub fn entry_frequency(
    frames: &AugmentedFrameSet,
    region: &BoundaryRegion,
    team_name: &str,
) -> usize {
    let mut entries: HashSet<(&str, i64)> = HashSet::new();

    for augmented in filter_by_boundary(frames, region) {
        let frame = &augmented.frame;
        if frame.team == team_name && frame.side == Side::T {
            entries.insert((frame.player.as_str(), frame.tick));
        }
    }

    entries.len()
}
