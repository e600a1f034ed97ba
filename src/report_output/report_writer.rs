use crate::report_output::analysis_report::AnalysisReport;
use crate::report_output::report_error::ReportError;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

/// Serializes the analysis report into a pretty-printed JSON string.
///
/// # Arguments
///
/// * `report` - The report to serialize.
///
/// # Returns
///
/// A `Result` containing the serialized JSON string if successful, or a
/// `ReportError` if serialization fails.
fn generate_json(report: &AnalysisReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Creates a JSON file from an `AnalysisReport` and writes it to the
/// specified filename.
///
/// # Arguments
///
/// * `filename` - The path to the file where the JSON will be written.
/// * `report` - The report to be included in the JSON file.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by
/// `ReportError`.
pub fn create_json_file(filename: &str, report: &AnalysisReport) -> Result<(), ReportError> {
    let json_output = generate_json(report)?;

    let file = File::create(filename).map_err(ReportError::FileCreation)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json_output.as_bytes())
        .map_err(ReportError::FileWrite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_output::overlay_document::OverlayDocument;
    use crate::state_analysis::analysis_config::HeatmapConfig;

    fn report() -> AnalysisReport {
        AnalysisReport {
            entry_team: "Team2".to_owned(),
            boundary_entry_count: 3,
            average_commit_seconds: Some(87.5),
            site_overlay: OverlayDocument::new(Vec::new(), &HeatmapConfig::default()),
        }
    }

    #[test]
    fn test_written_file_round_trips_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        create_json_file(path.to_str().unwrap(), &report()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["boundary_entry_count"], 3);
        assert_eq!(value["average_commit_seconds"], 87.5);
    }

    #[test]
    fn test_unwritable_path_is_creation_error() {
        let err = create_json_file("missing-dir/report.json", &report()).unwrap_err();
        assert!(matches!(err, ReportError::FileCreation(_)));
    }
}
