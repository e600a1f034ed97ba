use crate::report_output::overlay_document::OverlayDocument;
use serde::Serialize;

/// The derived statistics of one analysis run.
///
/// # Fields
///
/// * `entry_team` - The team whose boundary entries were counted.
/// * `boundary_entry_count` - Distinct (player, tick) attacking-side
///   observations inside the watched region.
/// * `average_commit_seconds` - Average in-round clock time of qualifying
///   objective commits; `null` when no round qualified, which is distinct
///   from a true zero average.
/// * `site_overlay` - The presence overlay for the rendering sink.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub entry_team: String,
    pub boundary_entry_count: usize,
    pub average_commit_seconds: Option<f64>,
    pub site_overlay: OverlayDocument,
}
