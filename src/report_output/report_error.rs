use thiserror::Error;

/// Errors that may occur while writing the analysis report.
///
/// # Variants
///
/// * `Serialization` - The report could not be serialized to JSON.
/// * `FileCreation` - The report file could not be created.
/// * `FileWrite` - The report could not be written to the file.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize analysis report: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to create report file: {0}")]
    FileCreation(std::io::Error),
    #[error("failed to write report file: {0}")]
    FileWrite(std::io::Error),
}
