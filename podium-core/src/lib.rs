//! podium-core
//!
//! The algorithmic heart of the podium workspace:
//!
//! - `normalize`: turn raw spreadsheet rows into validated [`Record`]s,
//!   silently dropping rows without a parseable score or date.
//! - `replay`: replay a chronologically ordered batch of records, track the
//!   evolving top-3 podium, and account how long each player held #1 and the
//!   2nd–3rd band.
//!
//! Everything here is pure and synchronous: one finite batch in, one
//! immutable result out. No I/O happens inside this crate.
#![warn(missing_docs)]

/// Row validation and field parsing.
pub mod normalize;
/// Podium maintenance and presence-interval accounting.
pub mod replay;
pub mod types;

pub use normalize::{normalize_row, parse_date, parse_score};
pub use replay::{BandLog, Podium, PresenceInterval, Replay, interval_days, replay};
pub use types::*;
