//! Shared data model and configuration primitives for the podium workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod record;
mod reports;

pub use config::{ColumnMap, LeaderboardConfig, PageStyle, PinnedRecord, ScoreDirection, SiteConfig};
pub use error::PodiumError;
pub use record::{Proof, Record};
pub use reports::{ChangeEvent, LeaderboardReport, PodiumEntry};
