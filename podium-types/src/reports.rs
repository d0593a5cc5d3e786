//! Report envelopes produced by the replayer and the analysis pipeline.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// One ranked entry of a podium snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodiumEntry {
    /// Sequence index of the record backing this entry.
    pub seq: usize,
    /// Player holding the position.
    pub player: String,
    /// Score that earned the position.
    pub score: f64,
}

/// A detected change of the top-3, emitted once per record that altered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Sequence index of the record that caused the change.
    pub seq: usize,
    /// Podium snapshot after the change, best first (length 1–3).
    pub podium: Vec<PodiumEntry>,
    /// Date of the triggering record.
    pub date: NaiveDate,
}

/// Full analysis result for one leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardReport {
    /// Every valid record, in input order.
    pub records: Vec<Record>,
    /// Podium changes, in replay order.
    pub changes: Vec<ChangeEvent>,
    /// Per-player total days spent at #1.
    pub first_place_days: BTreeMap<String, i64>,
    /// Per-player total days spent in positions 2–3.
    pub band_days: BTreeMap<String, i64>,
}

impl LeaderboardReport {
    /// Records whose submission altered the podium, in input order.
    ///
    /// This is the "record history" shown on report pages; records that never
    /// touched the top-3 are kept in `records` but not listed here.
    #[must_use]
    pub fn record_history(&self) -> Vec<&Record> {
        let changed: BTreeSet<usize> = self.changes.iter().map(|c| c.seq).collect();
        self.records
            .iter()
            .filter(|r| changed.contains(&r.seq))
            .collect()
    }
}
