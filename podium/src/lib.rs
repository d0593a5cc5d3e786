//! podium
//!
//! High-level site generation on top of `podium-core`:
//!
//! - `analyze`: per-leaderboard pipeline from records to a full report;
//! - `points`: per-event score-to-points formulas as a lookup table;
//! - `render`: static HTML builders for event pages, course pages, and the
//!   index;
//! - `site`: whole-site generation driven by a [`SiteConfig`], parallel
//!   across independent leaderboards.
#![warn(missing_docs)]

pub mod analyze;
pub mod points;
pub mod render;
pub mod site;

pub use analyze::{analyze_leaderboard, current_record};
pub use podium_core::types::*;
pub use site::generate_site;
