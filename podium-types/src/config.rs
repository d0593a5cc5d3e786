//! Configuration types shared by the ingestion and site-generation layers.

use std::cmp::Ordering;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which score value ranks first on a leaderboard.
///
/// The direction is a required, explicit part of every leaderboard's
/// configuration; it is never inferred from the data and has no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreDirection {
    /// Larger scores rank higher (most events and all courses).
    HigherIsBetter,
    /// Smaller scores rank higher (timed events).
    LowerIsBetter,
}

impl ScoreDirection {
    /// Order two scores so that `Ordering::Less` means `a` ranks above `b`.
    ///
    /// Unordered comparisons (NaN) collapse to `Equal`, leaving the
    /// sequence-index tie-break to decide.
    #[must_use]
    pub fn cmp_scores(self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Self::HigherIsBetter => ord.reverse(),
            Self::LowerIsBetter => ord,
        }
    }

    /// Whether `a` strictly outranks `b`.
    #[must_use]
    pub fn is_better(self, a: f64, b: f64) -> bool {
        self.cmp_scores(a, b) == Ordering::Less
    }
}

/// 1-based positional mapping from spreadsheet columns to record fields.
///
/// Only `score` and `date` gate row validity; the remaining columns are
/// filled when present and silently left empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Column holding the player name.
    #[serde(default = "default_player_col")]
    pub player: usize,
    /// Column holding the ranking score.
    pub score: usize,
    /// Column holding the `DD/MM/YYYY` submission date.
    pub date: usize,
    /// Column holding the proof link.
    pub link: usize,
    /// Columns holding per-event auxiliary scores, in course order.
    #[serde(default)]
    pub events: [Option<usize>; 3],
    /// Column holding bonus points.
    #[serde(default)]
    pub bonus: Option<usize>,
    /// Column holding the photo-evidence flag cell (`y`/`n`).
    #[serde(default)]
    pub photo: Option<usize>,
}

const fn default_player_col() -> usize {
    1
}

impl ColumnMap {
    /// Map with only the mandatory columns set.
    #[must_use]
    pub const fn new(score: usize, date: usize, link: usize) -> Self {
        Self {
            player: 1,
            score,
            date,
            link,
            events: [None, None, None],
            bonus: None,
            photo: None,
        }
    }

    /// Minimum row length for a row to be considered at all.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.score.max(self.date)
    }
}

/// Which page template a leaderboard renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageStyle {
    /// Single-score event page: current record, history, statistics.
    #[default]
    Simple,
    /// Course page with per-event splits and proof filtering controls.
    Advanced,
}

/// Configuration for one leaderboard (one event or one course).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Display name, e.g. "Hurdle Dash" or "Speed Course".
    pub name: String,
    /// CSV file holding the submissions, in chronological order.
    pub csv_file: PathBuf,
    /// Page path relative to the output directory, e.g. "events/hurdle-dash.html".
    pub output_file: PathBuf,
    /// Column layout of the CSV.
    pub columns: ColumnMap,
    /// Comparison direction. Required; never inferred.
    pub direction: ScoreDirection,
    /// Page template.
    #[serde(default)]
    pub style: PageStyle,
    /// Display names for the auxiliary event columns on course pages.
    #[serde(default)]
    pub event_names: [Option<String>; 3],
    /// Render scores with a `,` decimal separator on the index page.
    #[serde(default)]
    pub comma_decimal: bool,
}

/// A fixed record shown on the index for an event without its own page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinnedRecord {
    /// Event display name.
    pub name: String,
    /// Record holder, possibly a placeholder.
    pub player: String,
    /// Raw score.
    pub score: f64,
    /// Normalized points.
    pub points: i64,
    /// Date the record was set.
    pub date: NaiveDate,
}

/// Whole-site configuration: every leaderboard plus index extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title used on the index page.
    pub title: String,
    /// Course leaderboards (advanced pages).
    #[serde(default)]
    pub courses: Vec<LeaderboardConfig>,
    /// Event leaderboards (simple pages).
    #[serde(default)]
    pub events: Vec<LeaderboardConfig>,
    /// Fixed records listed on the index without a backing page.
    #[serde(default)]
    pub pinned: Vec<PinnedRecord>,
}
