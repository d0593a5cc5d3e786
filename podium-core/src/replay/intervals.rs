use std::collections::BTreeMap;

use chrono::NaiveDate;

/// A span during which one player continuously held a status band.
///
/// `end` is the date of the record that displaced the player (or the last
/// record's date for intervals still open at end of input). `end >= start`
/// is not guaranteed by construction; [`interval_days`] clamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceInterval {
    /// Player who held the band.
    pub player: String,
    /// Date the tenure began.
    pub start: NaiveDate,
    /// Date the tenure ended.
    pub end: NaiveDate,
}

/// Days contributed by a closed interval: `max(0, end - start)`.
///
/// The floor at zero is mandatory: a same-day takeover contributes nothing,
/// never a negative amount.
#[must_use]
pub fn interval_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days().max(0)
}

/// Interval bookkeeping for one status band (#1, or positions 2–3).
///
/// Holds the start dates of currently open tenures plus the log of closed
/// intervals. The open map is a `BTreeMap` so that no iteration-order
/// artifact can ever reach the output; the replay only reads membership.
#[derive(Debug, Clone, Default)]
pub struct BandLog {
    open: BTreeMap<String, NaiveDate>,
    closed: Vec<PresenceInterval>,
}

impl BandLog {
    /// Open a tenure for `player` unless one is already open.
    ///
    /// Keeping an existing start date is the tenure-continuity rule: a player
    /// who stays in the band across a composition change among the other
    /// members must not have their clock reset.
    pub fn open(&mut self, player: &str, start: NaiveDate) {
        self.open.entry(player.to_string()).or_insert(start);
    }

    /// Close `player`'s open tenure at `end`, if one exists.
    pub fn close(&mut self, player: &str, end: NaiveDate) {
        if let Some(start) = self.open.remove(player) {
            self.closed.push(PresenceInterval {
                player: player.to_string(),
                start,
                end,
            });
        }
    }

    /// Close every open tenure whose player fails the membership predicate.
    pub fn close_departed<F>(&mut self, still_member: F, end: NaiveDate)
    where
        F: Fn(&str) -> bool,
    {
        let departed: Vec<String> = self
            .open
            .keys()
            .filter(|p| !still_member(p))
            .cloned()
            .collect();
        for player in departed {
            self.close(&player, end);
        }
    }

    /// Close every open tenure at `end`. Called once after the last record.
    pub fn close_all(&mut self, end: NaiveDate) {
        let open = std::mem::take(&mut self.open);
        for (player, start) in open {
            self.closed.push(PresenceInterval { player, start, end });
        }
    }

    /// Closed intervals, in closure order.
    #[must_use]
    pub fn closed(&self) -> &[PresenceInterval] {
        &self.closed
    }

    /// Per-player day totals over all closed intervals.
    #[must_use]
    pub fn day_totals(&self) -> BTreeMap<String, i64> {
        let mut totals: BTreeMap<String, i64> = BTreeMap::new();
        for iv in &self.closed {
            *totals.entry(iv.player.clone()).or_insert(0) += interval_days(iv.start, iv.end);
        }
        totals
    }
}
