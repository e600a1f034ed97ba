use crate::frame_ingestion::frame::Side;
use crate::frame_ingestion::frame_set::{AugmentedFrame, AugmentedFrameSet};
use crate::state_analysis::analysis_config::ObjectiveTimerConfig;
use crate::state_analysis::analysis_error::AnalysisError;

use std::collections::BTreeMap;
use tracing::debug;

/// Average in-round clock time at which the configured team commits to the
/// objective area with a qualifying loadout.
///
/// The frame set is restricted to the configured team on the attacking side
/// inside the configured area, then partitioned by round. A round qualifies
/// when at least `qualifying_threshold` roster players are awarded to one
/// qualifying class; each player is classified from the first frame they
/// appear in within the round, and is awarded to the first class (in
/// priority order) whose substring matches any carried weapon-class label.
/// For every qualifying round, the clock time of the round's last frame is
/// parsed and the parsed seconds are averaged.
///
/// # Arguments
///
/// * `frames` - The augmented frame set to measure.
/// * `config` - The team, area, roster, and qualification rule.
///
/// # Returns
///
/// `Ok(Some(seconds))` with the average over qualifying rounds, `Ok(None)`
/// when no round qualifies, or an `AnalysisError` naming the round whose
/// clock time is missing or malformed.
pub fn average_commit_timer(
    frames: &AugmentedFrameSet,
    config: &ObjectiveTimerConfig,
) -> Result<Option<f64>, AnalysisError> {
    let rounds = partition_by_round(frames, config);

    let mut total_seconds: u64 = 0;
    let mut qualifying_rounds: u32 = 0;

    for (round_num, round_frames) in rounds {
        if !has_qualifying_loadout(&round_frames, config) {
            continue;
        }

        let closing = match round_frames.last() {
            Some(frame) => frame,
            None => continue,
        };
        let clock = closing
            .frame
            .clock_time
            .as_deref()
            .ok_or(AnalysisError::MissingClockTime { round_num })?;
        let seconds = parse_clock_seconds(clock).ok_or_else(|| AnalysisError::ClockParse {
            round_num,
            value: clock.to_owned(),
        })?;

        debug!(round_num, seconds, "qualifying round");
        total_seconds += seconds;
        qualifying_rounds += 1;
    }

    if qualifying_rounds == 0 {
        return Ok(None);
    }

    Ok(Some(total_seconds as f64 / f64::from(qualifying_rounds)))
}

/// Partitions the team's attacking-side frames inside the area by round,
/// preserving recording order within each round.
fn partition_by_round<'a>(
    frames: &'a AugmentedFrameSet,
    config: &ObjectiveTimerConfig,
) -> BTreeMap<u32, Vec<&'a AugmentedFrame>> {
    let mut rounds: BTreeMap<u32, Vec<&AugmentedFrame>> = BTreeMap::new();

    for augmented in frames.frames() {
        let frame = &augmented.frame;
        if frame.team == config.team && frame.side == Side::T && frame.in_area(&config.area) {
            rounds.entry(frame.round_num).or_default().push(augmented);
        }
    }

    rounds
}

/// Whether enough roster players carry one qualifying weapon class.
///
/// Each roster player is classified from their first frame in the round, if
/// any, and is awarded to exactly one class: the first configured class whose
/// substring matches any of the player's weapon-class labels.
fn has_qualifying_loadout(round_frames: &[&AugmentedFrame], config: &ObjectiveTimerConfig) -> bool {
    let mut class_counts = vec![0usize; config.qualifying_classes.len()];

    for player in &config.roster {
        let first_appearance = round_frames
            .iter()
            .find(|augmented| augmented.frame.player == *player);
        let Some(first_appearance) = first_appearance else {
            continue;
        };

        let awarded = config.qualifying_classes.iter().position(|class| {
            first_appearance
                .weapon_classes
                .iter()
                .any(|label| label.contains(class.as_str()))
        });
        if let Some(index) = awarded {
            class_counts[index] += 1;
        }
    }

    class_counts
        .iter()
        .any(|&count| count >= config.qualifying_threshold)
}

/// Parses an `"MM:SS"` clock string into total seconds.
fn parse_clock_seconds(raw: &str) -> Option<u64> {
    let (minutes, seconds) = raw.split_once(':')?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;

    Some(minutes * 60 + seconds)
}
