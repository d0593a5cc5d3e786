//! Leaderboard replay: reconstruct the top-3 history from an ordered batch.
//!
//! Modules include:
//! - `podium`: the bounded, sorted top-3 standings
//! - `intervals`: presence-interval bookkeeping and day accounting
//! - `engine`: the single-pass replay over a record batch

/// The replay loop and its result type.
mod engine;
/// Presence intervals and per-band accounting.
mod intervals;
/// Top-3 standings maintenance.
mod podium;

pub use engine::{Replay, replay};
pub use intervals::{BandLog, PresenceInterval, interval_days};
pub use podium::Podium;
