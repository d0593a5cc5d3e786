use std::fmt::Write as _;

use podium_types::{LeaderboardReport, Record, ScoreDirection};

use crate::analyze::current_record;

use super::{date_dmy, escape, fmt_score, fmt_split, page_close, page_open, proof_anchor,
    stats_table};

const PROOF_FILTERS: &[(&str, &str)] = &[
    ("all-record", "ALL RECORDS"),
    ("verified-record", "VERIFIED RECORD"),
    ("photo", "PHOTO"),
    ("video", "VIDEO"),
];

/// Render a course page: proof filtering controls, current record with
/// per-event splits, record history, and leaderboard statistics.
#[must_use]
pub fn render_course_page(
    name: &str,
    report: &LeaderboardReport,
    direction: ScoreDirection,
    event_names: &[Option<String>; 3],
) -> String {
    let headers: [&str; 3] = [
        event_names[0].as_deref().unwrap_or("Event 1"),
        event_names[1].as_deref().unwrap_or("Event 2"),
        event_names[2].as_deref().unwrap_or("Event 3"),
    ];

    let mut out = String::new();
    page_open(&mut out, &format!("{name} - World Records"), "../");
    let _ = write!(
        &mut out,
        "    <nav><a href=\"../index.html\">&larr; Back to All Events</a></nav>\n\n    <h1>{}</h1>\n\n",
        escape(name)
    );

    out.push_str(
        "    <div class=\"filter-container\">\n        <h3>Filter by Proof Type</h3>\n        <div class=\"filter-options\">\n",
    );
    for (i, (value, label)) in PROOF_FILTERS.iter().enumerate() {
        let checked = if i == 0 { " checked" } else { "" };
        let _ = write!(
            &mut out,
            "            <div class=\"filter-option\">\n                <input type=\"radio\" id=\"{value}\" name=\"proofFilter\" value=\"{value}\"{checked}>\n                <label for=\"{value}\">{label}</label>\n            </div>\n",
        );
    }
    out.push_str(
        "        </div>\n        <div class=\"filter-info\">\n            Choose how strict you want the proof requirements to be.\n        </div>\n    </div>\n\n",
    );

    out.push_str(
        "    <h2>Current Record</h2>\n    <div class=\"table-wrapper\">\n    <table>\n",
    );
    course_table_head(&mut out, &headers);
    if let Some(record) = current_record(&report.records, direction) {
        course_row(&mut out, record);
    }
    out.push_str("        </tbody>\n    </table>\n    </div>\n\n");

    out.push_str(
        "    <h2>Record History</h2>\n    <div class=\"table-wrapper\">\n    <table>\n",
    );
    course_table_head(&mut out, &headers);
    for record in report.record_history() {
        course_row(&mut out, record);
    }
    out.push_str("        </tbody>\n    </table>\n    </div>\n\n");

    stats_table(&mut out, report);
    page_close(&mut out, "../");
    out
}

fn course_table_head(out: &mut String, headers: &[&str; 3]) {
    let _ = write!(
        out,
        "        <thead>\n            <tr>\n                <th>Player</th>\n                <th data-sort-method='number'>Total Score</th>\n                <th data-sort-method='number'>{}</th>\n                <th data-sort-method='number'>{}</th>\n                <th data-sort-method='number'>{}</th>\n                <th data-sort-method='number'>Bonus Points</th>\n                <th>Date</th>\n                <th>Proof</th>\n            </tr>\n        </thead>\n        <tbody>\n",
        escape(headers[0]),
        escape(headers[1]),
        escape(headers[2]),
    );
}

fn course_row(out: &mut String, record: &Record) {
    let _ = write!(
        out,
        "            <tr data-proof=\"{}\">\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n            </tr>\n",
        record.proof().label(),
        escape(&record.player),
        fmt_score(record.score),
        fmt_split(record.event_scores[0]),
        fmt_split(record.event_scores[1]),
        fmt_split(record.event_scores[2]),
        fmt_split(record.bonus),
        date_dmy(record.date),
        proof_anchor(record, false),
    );
}
