use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::points::formula_for;

use super::{date_dmy, escape, fmt_comma_decimal, fmt_score, fmt_split, page_close, page_open};

/// Best record of a course, summarized for the index table.
#[derive(Debug, Clone)]
pub struct CourseBest {
    /// Record holder.
    pub player: String,
    /// Total course score.
    pub total: f64,
    /// Per-event splits.
    pub splits: [Option<f64>; 3],
    /// Bonus points.
    pub bonus: Option<f64>,
    /// Date the record was set.
    pub date: NaiveDate,
}

/// One course row on the index.
#[derive(Debug, Clone)]
pub struct CourseSummary {
    /// Course display name.
    pub name: String,
    /// Link to the course page, relative to the index.
    pub href: String,
    /// Current record, if the course has any valid records.
    pub record: Option<CourseBest>,
}

/// Best record of a single event, summarized for the index table.
#[derive(Debug, Clone)]
pub struct EventBest {
    /// Record holder.
    pub player: String,
    /// Raw event score.
    pub score: f64,
    /// Display the score with a `,` decimal separator (timed events).
    pub comma_decimal: bool,
    /// Normalized points.
    pub points: i64,
    /// Date the record was set.
    pub date: NaiveDate,
}

/// One event row on the index.
#[derive(Debug, Clone)]
pub struct EventSummary {
    /// Event display name.
    pub name: String,
    /// Link to the event page; pinned events without a page have none.
    pub href: Option<String>,
    /// Current record, if known.
    pub record: Option<EventBest>,
}

/// Render the site index: one table of course records, one of event records.
#[must_use]
pub fn render_index(title: &str, courses: &[CourseSummary], events: &[EventSummary]) -> String {
    let mut out = String::new();
    page_open(&mut out, title, "");
    let _ = write!(&mut out, "    <h1>{}</h1>\n\n", escape(title));

    out.push_str(
        "    <h2>Course World Records</h2>\n    <div class=\"table-wrapper\">\n    <table>\n        <thead>\n            <tr>\n                <th>Course</th>\n                <th>Player</th>\n                <th>Total Score</th>\n                <th>First event</th>\n                <th>Second event</th>\n                <th>Third event</th>\n                <th>Bonus points</th>\n                <th>Date</th>\n            </tr>\n        </thead>\n        <tbody>\n",
    );
    for course in courses {
        let name_cell = format!(
            "<a href=\"{}\">{}</a>",
            escape(&course.href),
            escape(&course.name)
        );
        match &course.record {
            Some(best) => {
                let _ = write!(
                    &mut out,
                    "            <tr>\n                <td>{name_cell}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n            </tr>\n",
                    escape(&best.player),
                    fmt_score(best.total),
                    fmt_split(best.splits[0]),
                    fmt_split(best.splits[1]),
                    fmt_split(best.splits[2]),
                    fmt_split(best.bonus),
                    date_dmy(best.date),
                );
            }
            None => {
                let _ = write!(
                    &mut out,
                    "            <tr>\n                <td>{name_cell}</td>\n                <td>&ndash;</td>\n                <td>&ndash;</td>\n                <td>&ndash;</td>\n                <td>&ndash;</td>\n                <td>&ndash;</td>\n                <td>&ndash;</td>\n                <td>&ndash;</td>\n            </tr>\n",
                );
            }
        }
    }
    out.push_str("        </tbody>\n    </table>\n    </div>\n\n");

    out.push_str(
        "    <h2>Single Event World Records</h2>\n    <div class=\"table-wrapper\">\n    <table>\n        <thead>\n            <tr>\n                <th>Event</th>\n                <th>Player</th>\n                <th>Score</th>\n                <th>Points</th>\n                <th>Formula</th>\n                <th>Date</th>\n            </tr>\n        </thead>\n        <tbody>\n",
    );
    for event in events {
        let name_cell = match &event.href {
            Some(href) => format!(
                "<a href=\"{}\">{}</a>",
                escape(href),
                escape(&event.name)
            ),
            None => escape(&event.name),
        };
        let notation = formula_for(&event.name).map_or("&ndash;", |f| f.notation);
        match &event.record {
            Some(best) => {
                let score_cell = if best.comma_decimal {
                    fmt_comma_decimal(best.score)
                } else {
                    fmt_score(best.score)
                };
                let _ = write!(
                    &mut out,
                    "            <tr>\n                <td>{name_cell}</td>\n                <td>{}</td>\n                <td>{score_cell}</td>\n                <td>{}</td>\n                <td>{notation}</td>\n                <td>{}</td>\n            </tr>\n",
                    escape(&best.player),
                    best.points,
                    date_dmy(best.date),
                );
            }
            None => {
                let _ = write!(
                    &mut out,
                    "            <tr>\n                <td>{name_cell}</td>\n                <td>&ndash;</td>\n                <td>&ndash;</td>\n                <td>&ndash;</td>\n                <td>{notation}</td>\n                <td>&ndash;</td>\n            </tr>\n",
                );
            }
        }
    }
    out.push_str("        </tbody>\n    </table>\n    </div>\n\n");

    page_close(&mut out, "");
    out
}
