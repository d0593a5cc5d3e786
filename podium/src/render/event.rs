use std::fmt::Write as _;

use podium_types::{LeaderboardReport, ScoreDirection};

use crate::analyze::current_record;

use super::{date_dmy, date_iso, escape, fmt_score, page_close, page_open, proof_anchor,
    stats_table};

/// Render a single-score event page.
///
/// Sections: current record, record history (records that changed the
/// podium), and leaderboard statistics.
#[must_use]
pub fn render_event_page(
    name: &str,
    report: &LeaderboardReport,
    direction: ScoreDirection,
) -> String {
    let mut out = String::new();
    page_open(&mut out, &format!("{name} - World Records"), "../");
    let _ = write!(
        &mut out,
        "    <nav><a href=\"../index.html\">&larr; Back to All Events</a></nav>\n\n    <h1>{} WR</h1>\n\n",
        escape(name)
    );

    out.push_str(
        "    <h2>Current Record</h2>\n    <div class=\"table-wrapper\">\n    <table>\n        <thead>\n            <tr>\n                <th>Score</th>\n                <th>Player</th>\n                <th>Date</th>\n                <th>Proof</th>\n            </tr>\n        </thead>\n        <tbody>\n",
    );
    if let Some(record) = current_record(&report.records, direction) {
        let _ = write!(
            &mut out,
            "            <tr>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n            </tr>\n",
            fmt_score(record.score),
            escape(&record.player),
            date_iso(record.date),
            proof_anchor(record, true),
        );
    }
    out.push_str("        </tbody>\n    </table>\n    </div>\n\n");

    out.push_str(
        "    <h2>Record History</h2>\n    <div class=\"table-wrapper\">\n    <table>\n        <thead>\n            <tr>\n                <th>Player</th>\n                <th data-sort-method='number'>Score</th>\n                <th>Date</th>\n                <th>Proof</th>\n            </tr>\n        </thead>\n        <tbody>\n",
    );
    for record in report.record_history() {
        let _ = write!(
            &mut out,
            "            <tr>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n            </tr>\n",
            escape(&record.player),
            fmt_score(record.score),
            date_dmy(record.date),
            proof_anchor(record, true),
        );
    }
    out.push_str("        </tbody>\n    </table>\n    </div>\n\n");

    stats_table(&mut out, report);
    page_close(&mut out, "../");
    out
}
