//! Re-export of foundational types from `podium-types`.
// Consolidated re-exports so downstream crates can depend on `podium-core` only

pub use podium_types::{
    ChangeEvent, ColumnMap, LeaderboardConfig, LeaderboardReport, PageStyle, PinnedRecord,
    PodiumEntry, PodiumError, Proof, Record, ScoreDirection, SiteConfig,
};
