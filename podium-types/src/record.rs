use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One validated leaderboard submission.
///
/// Records are produced by the normalizer and are immutable afterwards. A
/// `Record` always carries a parsed score and date; rows that fail either
/// parse never become records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the input batch (1-based). Stable tie-break for equal scores.
    pub seq: usize,
    /// Player identifier, trimmed.
    pub player: String,
    /// Raw score as submitted. Comparison direction is per-leaderboard config.
    pub score: f64,
    /// Submission date (calendar date, no time-of-day).
    pub date: NaiveDate,
    /// Proof link, possibly empty.
    pub link: String,
    /// Whether the submission claims photographic/video evidence.
    pub photo: bool,
    /// Per-event auxiliary scores for course submissions, in course order.
    pub event_scores: [Option<f64>; 3],
    /// Bonus points for course submissions.
    pub bonus: Option<f64>,
}

impl Record {
    /// Classify this record's proof from its photo flag and link host.
    #[must_use]
    pub fn proof(&self) -> Proof {
        Proof::classify(self.photo, &self.link)
    }
}

/// How a submission is evidenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proof {
    /// Linked evidence on a video host.
    Video,
    /// Photographic evidence.
    Photo,
    /// Claimed without verifiable evidence.
    Claimed,
}

impl Proof {
    /// Classify from the photo flag and the proof link.
    ///
    /// A flagged submission whose link points at a YouTube host counts as
    /// video; any other flagged submission counts as photo; unflagged
    /// submissions are claims.
    #[must_use]
    pub fn classify(photo: bool, link: &str) -> Self {
        if photo {
            if link.contains("youtube.com") || link.contains("youtu.be") {
                Self::Video
            } else {
                Self::Photo
            }
        } else {
            Self::Claimed
        }
    }

    /// Lowercase label used in page markup (`data-proof` attributes).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Photo => "photo",
            Self::Claimed => "claimed",
        }
    }
}
