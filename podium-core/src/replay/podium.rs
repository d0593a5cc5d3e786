use podium_types::{PodiumEntry, Record, ScoreDirection};

/// The current top-3 standings of a leaderboard at a point in replay time.
///
/// Invariants, re-established after every insertion:
/// - at most 3 entries;
/// - sorted by the configured direction, with ascending sequence index as the
///   tie-break (earlier submission wins the higher rank on equal score).
///
/// Equality compares entries element-wise by player, score, and sequence
/// index, which is exactly the change-detection identity the replayer needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Podium {
    entries: Vec<PodiumEntry>,
}

impl Podium {
    /// Insert a record as a podium candidate and re-rank.
    pub fn insert(&mut self, record: &Record, direction: ScoreDirection) {
        self.entries.push(PodiumEntry {
            seq: record.seq,
            player: record.player.clone(),
            score: record.score,
        });
        self.entries.sort_by(|a, b| {
            direction
                .cmp_scores(a.score, b.score)
                .then(a.seq.cmp(&b.seq))
        });
        self.entries.truncate(3);
    }

    /// The current #1 entry, if any record has been placed yet.
    #[must_use]
    pub fn leader(&self) -> Option<&PodiumEntry> {
        self.entries.first()
    }

    /// Entries in positions 2 and 3, in rank order.
    pub fn runners_up(&self) -> impl Iterator<Item = &PodiumEntry> {
        self.entries.iter().skip(1)
    }

    /// Ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[PodiumEntry] {
        &self.entries
    }

    /// Number of occupied positions (0–3).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no record has reached the podium yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
