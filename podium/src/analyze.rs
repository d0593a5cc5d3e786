//! Per-leaderboard analysis: replay a batch and package the results.

use podium_core::replay::replay;
use podium_types::{LeaderboardReport, Record, ScoreDirection};

/// Run the full analysis for one leaderboard.
///
/// Replays the batch in input order and bundles the change events and day
/// totals together with the records themselves.
#[must_use]
pub fn analyze_leaderboard(records: Vec<Record>, direction: ScoreDirection) -> LeaderboardReport {
    let result = replay(&records, direction);
    LeaderboardReport {
        records,
        changes: result.changes,
        first_place_days: result.first_place_days,
        band_days: result.band_days,
    }
}

/// The current record: the best-scoring record under `direction`.
///
/// Ties keep the earliest submission, consistent with the replay tie-break.
#[must_use]
pub fn current_record(records: &[Record], direction: ScoreDirection) -> Option<&Record> {
    records.iter().reduce(|best, r| {
        if direction.is_better(r.score, best.score) {
            r
        } else {
            best
        }
    })
}
