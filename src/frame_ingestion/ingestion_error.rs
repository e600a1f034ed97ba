use std::path::PathBuf;
use thiserror::Error;

/// Errors that may occur while loading the recorded frame dataset.
///
/// # Variants
///
/// * `Io` - A file or directory could not be read.
/// * `MalformedFrame` - A record failed to deserialize; carries the file and
///   1-based line number of the offending record.
/// * `ThreadPool` - The ingestion thread pool could not be built.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed frame record at {path}:{line}: {source}")]
    MalformedFrame {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to build ingestion thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
