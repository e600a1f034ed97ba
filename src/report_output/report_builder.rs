use crate::frame_ingestion::frame_set::AugmentedFrameSet;
use crate::report_output::analysis_report::AnalysisReport;
use crate::report_output::overlay_document::OverlayDocument;
use crate::state_analysis::analysis_config::AnalysisConfig;
use crate::state_analysis::analysis_error::AnalysisError;
use crate::state_analysis::entry_frequency::entry_frequency;
use crate::state_analysis::heatmap_mapper::project_overlay_points;
use crate::state_analysis::objective_timer::average_commit_timer;

/// Computes every configured statistic over the augmented frame set.
///
/// # Arguments
///
/// * `frames` - The augmented frame set to analyze.
/// * `config` - The run configuration.
///
/// # Returns
///
/// A `Result` containing the assembled `AnalysisReport`, or the
/// `AnalysisError` of the first aggregation that failed. No partial report
/// is produced on failure.
pub fn build_report(
    frames: &AugmentedFrameSet,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    let boundary_entry_count = entry_frequency(frames, &config.boundary, &config.entry_team);
    let average_commit_seconds = average_commit_timer(frames, &config.objective_timer)?;
    let points = project_overlay_points(frames, &config.heatmap);

    Ok(AnalysisReport {
        entry_team: config.entry_team.clone(),
        boundary_entry_count,
        average_commit_seconds,
        site_overlay: OverlayDocument::new(points, &config.heatmap),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_ingestion::frame::{Frame, Side};
    use crate::frame_ingestion::frame_set::RawFrameSet;

    #[test]
    fn test_empty_dataset_builds_empty_report() {
        let frames = RawFrameSet::new(Vec::new()).augment();
        let report = build_report(&frames, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.boundary_entry_count, 0);
        assert_eq!(report.average_commit_seconds, None);
        assert!(report.site_overlay.points.is_empty());
        assert_eq!(report.site_overlay.background, "de_overpass_radar.jpeg");
    }

    #[test]
    fn test_report_serializes_missing_average_as_null() {
        let frames = RawFrameSet::new(vec![Frame {
            tick: 1,
            round_num: 1,
            player: "Player1".to_owned(),
            team: "Team1".to_owned(),
            side: Side::Ct,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            area_name: Some("BombsiteB".to_owned()),
            clock_time: None,
            inventory: None,
        }])
        .augment();

        let report = build_report(&frames, &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["average_commit_seconds"].is_null());
        assert_eq!(json["site_overlay"]["points"].as_array().unwrap().len(), 1);
    }
}
