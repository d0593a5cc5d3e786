//! Static HTML rendering for leaderboard report pages.
//!
//! Pages are built into a `String` with `fmt::Write`; there is no templating
//! layer. Each builder takes already-analyzed data and is pure.

/// Course ("advanced") page with per-event splits and proof filtering.
pub mod course;
/// Event ("simple") page: current record, history, statistics.
pub mod event;
/// Site index: course and event record tables.
pub mod index;

use std::fmt::Write as _;

use chrono::NaiveDate;
use podium_types::{LeaderboardReport, Proof, Record};

/// Escape text for HTML element and attribute content.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a score without a trailing `.0` for whole numbers.
#[must_use]
pub fn fmt_score(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Render a time-like score with one decimal and a `,` separator.
#[must_use]
pub fn fmt_comma_decimal(value: f64) -> String {
    format!("{value:.1}").replace('.', ",")
}

/// Render an auxiliary split as a whole number, or `--` when absent or zero.
pub(crate) fn fmt_split(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format!("{}", v as i64),
        _ => "--".to_string(),
    }
}

pub(crate) fn date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn date_dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Proof link anchor. Event pages label bare claims "Link"; course pages use
/// the stricter "Claimed Only".
pub(crate) fn proof_anchor(record: &Record, event_page: bool) -> String {
    let label = match record.proof() {
        Proof::Video => "Video",
        Proof::Photo => "Photo",
        Proof::Claimed => {
            if event_page {
                "Link"
            } else {
                "Claimed Only"
            }
        }
    };
    format!("<a href=\"{}\">{label}</a>", escape(&record.link))
}

pub(crate) fn page_open(out: &mut String, title: &str, asset_prefix: &str) {
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>{}</title>\n    <link rel=\"stylesheet\" href=\"{asset_prefix}style.css\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n</head>\n<body>\n",
        escape(title)
    );
}

pub(crate) fn page_close(out: &mut String, asset_prefix: &str) {
    let _ = write!(
        out,
        "    <script src=\"{asset_prefix}js/tablesort.min.js\"></script>\n    <script src=\"{asset_prefix}js/tablesort.number.min.js\"></script>\n    <script>\n        document.querySelectorAll('table').forEach(table => {{\n            const sort = new Tablesort(table);\n        }});\n    </script>\n</body>\n</html>\n"
    );
}

/// Leaderboard statistics table: days at #1 and days in positions 2–3.
///
/// Rows cover every player who ever held either band, sorted by band days
/// descending with the player name as a deterministic tie-break.
pub(crate) fn stats_table(out: &mut String, report: &LeaderboardReport) {
    let mut names: Vec<&String> = report
        .first_place_days
        .keys()
        .chain(report.band_days.keys())
        .collect();
    names.sort();
    names.dedup();
    names.sort_by_key(|n| -report.band_days.get(*n).copied().unwrap_or(0));

    out.push_str(
        "    <h2>Leaderboard Statistics</h2>\n    <div class=\"table-wrapper\">\n    <table>\n        <thead>\n            <tr>\n                <th>Player</th>\n                <th data-sort-method='number'>Number of days at #1</th>\n                <th data-sort-method='number'>Number of days in Top 3 (positions 2-3)</th>\n            </tr>\n        </thead>\n        <tbody>\n",
    );
    for name in names {
        let _ = write!(
            out,
            "            <tr>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n            </tr>\n",
            escape(name),
            report.first_place_days.get(name).copied().unwrap_or(0),
            report.band_days.get(name).copied().unwrap_or(0),
        );
    }
    out.push_str("        </tbody>\n    </table>\n    </div>\n");
}
