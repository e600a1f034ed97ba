use thiserror::Error;

/// Errors that may occur while computing a derived statistic.
///
/// # Variants
///
/// * `MissingClockTime` - A qualifying round's closing frame carries no clock
///   time, so its commit timer cannot be measured.
/// * `ClockParse` - A clock time is not of the form `"MM:SS"` with two
///   non-negative integers; carries the offending round and raw value.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("round {round_num} has no clock time on its closing frame")]
    MissingClockTime { round_num: u32 },
    #[error("round {round_num} has unparseable clock time {value:?}")]
    ClockParse { round_num: u32, value: String },
}
