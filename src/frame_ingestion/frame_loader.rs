use crate::frame_ingestion::frame::Frame;
use crate::frame_ingestion::frame_set::RawFrameSet;
use crate::frame_ingestion::ingestion_error::IngestionError;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use std::fs::{read_dir, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads the recorded frame dataset from the given path.
///
/// The path may be a single JSON-lines file (one frame record per line) or a
/// directory containing `.jsonl` files. Directory contents are parsed in
/// parallel, one file per task, and concatenated in lexicographic filename
/// order so the resulting frame order is deterministic.
///
/// # Arguments
///
/// * `input_path` - The dataset file or directory to load.
/// * `num_threads` - The number of threads to use when parsing a directory.
///
/// # Returns
///
/// A `Result` containing the ordered `RawFrameSet`, or an `IngestionError`
/// naming the offending file (and line, for a malformed record). No partial
/// dataset is returned on failure.
pub fn load_frames(input_path: &str, num_threads: usize) -> Result<RawFrameSet, IngestionError> {
    let path = Path::new(input_path);

    let frames = if path.is_dir() {
        load_directory(path, num_threads)?
    } else {
        load_frame_file(path)?
    };

    info!(
        frames = frames.len(),
        path = %path.display(),
        "frame dataset loaded"
    );

    Ok(RawFrameSet::new(frames))
}

/// Parses every `.jsonl` file in the directory on a dedicated thread pool and
/// concatenates the per-file frame vectors in filename order.
fn load_directory(dir_path: &Path, num_threads: usize) -> Result<Vec<Frame>, IngestionError> {
    let thread_pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;

    let paths = collect_frame_files(dir_path)?;

    let per_file: Vec<Vec<Frame>> = thread_pool.install(|| {
        paths
            .par_iter()
            .map(|path| load_frame_file(path))
            .collect::<Result<_, _>>()
    })?;

    Ok(per_file.into_iter().flatten().collect())
}

/// Collects all `.jsonl` files from the specified directory, sorted by name.
///
/// # Arguments
///
/// * `dir_path` - The directory containing frame files.
///
/// # Returns
///
/// A `Result` containing the sorted paths, or an `IngestionError` if the
/// directory could not be read.
fn collect_frame_files(dir_path: &Path) -> Result<Vec<PathBuf>, IngestionError> {
    let dir = read_dir(dir_path).map_err(|source| IngestionError::Io {
        path: dir_path.to_owned(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = dir
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "jsonl"))
        .collect();
    paths.sort();

    Ok(paths)
}

/// Parses a single JSON-lines frame file, preserving line order.
///
/// Blank lines are ignored. A record that fails to deserialize aborts the
/// load with the file path and 1-based line number.
fn load_frame_file(path: &Path) -> Result<Vec<Frame>, IngestionError> {
    let file = File::open(path).map_err(|source| IngestionError::Io {
        path: path.to_owned(),
        source,
    })?;

    let reader = BufReader::new(file);
    let mut frames = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| IngestionError::Io {
            path: path.to_owned(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let frame =
            serde_json::from_str(&line).map_err(|source| IngestionError::MalformedFrame {
                path: path.to_owned(),
                line: index + 1,
                source,
            })?;
        frames.push(frame);
    }

    Ok(frames)
}
