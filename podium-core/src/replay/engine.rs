use std::collections::{BTreeMap, BTreeSet};

use podium_types::{ChangeEvent, Record, ScoreDirection};

use super::intervals::{BandLog, PresenceInterval};
use super::podium::Podium;

/// Result of replaying one leaderboard's batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replay {
    /// Podium changes, one per record that altered the top-3, in input order.
    pub changes: Vec<ChangeEvent>,
    /// Per-player total days at #1.
    pub first_place_days: BTreeMap<String, i64>,
    /// Per-player total days in positions 2–3.
    pub band_days: BTreeMap<String, i64>,
    /// Closed #1 tenures, in closure order.
    pub first_intervals: Vec<PresenceInterval>,
    /// Closed 2nd–3rd tenures, in closure order.
    pub band_intervals: Vec<PresenceInterval>,
}

/// Replay an ordered batch of records and account podium presence.
///
/// `records` must be in chronological submission order; the sequence index of
/// each record is the deterministic tie-break for equal scores. Input is
/// assumed validated by the normalizer, so there is no failure path: the
/// replay is total and deterministic.
///
/// Per record:
/// 1. the record joins the podium candidates, ranked by `direction` with
///    ascending `seq` as tie-break, truncated to 3;
/// 2. if the ranked top-3 is unchanged, nothing else happens;
/// 3. otherwise, 2nd–3rd tenures are closed for players who left the band,
///    the #1 tenure hands over if the leader changed, players now in ranks
///    2–3 keep or open their tenure (continuity), and a [`ChangeEvent`] is
///    emitted.
///
/// After the last record every still-open tenure closes at that record's
/// date. Each closed tenure contributes `max(0, end - start)` whole days.
#[must_use]
pub fn replay(records: &[Record], direction: ScoreDirection) -> Replay {
    let mut podium = Podium::default();
    let mut first = BandLog::default();
    let mut band = BandLog::default();
    let mut changes: Vec<ChangeEvent> = Vec::new();

    for record in records {
        let previous = podium.clone();
        podium.insert(record, direction);
        if podium == previous {
            continue;
        }

        // Positions 2-3 after this record; rank 1 is excluded from the band.
        let members: BTreeSet<&str> = podium.runners_up().map(|e| e.player.as_str()).collect();
        band.close_departed(|p| members.contains(p), record.date);

        match (previous.leader(), podium.leader()) {
            (Some(prev), Some(new)) if prev.player != new.player => {
                first.close(&prev.player, record.date);
                first.open(&new.player, record.date);
            }
            (None, Some(new)) => {
                // Very first record on the podium: open with no closure.
                first.open(&new.player, record.date);
            }
            _ => {}
        }

        for entry in podium.runners_up() {
            band.open(&entry.player, record.date);
        }

        changes.push(ChangeEvent {
            seq: record.seq,
            podium: podium.entries().to_vec(),
            date: record.date,
        });
    }

    if let Some(last) = records.last() {
        band.close_all(last.date);
        first.close_all(last.date);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        records = records.len(),
        changes = changes.len(),
        "replay complete"
    );

    Replay {
        changes,
        first_place_days: first.day_totals(),
        band_days: band.day_totals(),
        first_intervals: first.closed().to_vec(),
        band_intervals: band.closed().to_vec(),
    }
}
