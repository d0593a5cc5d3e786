//! Whole-site generation driven by a [`SiteConfig`].
//!
//! Leaderboards are independent (no shared replay state), so their pages are
//! built in parallel. A failing leaderboard is logged and skipped; the rest
//! of the site still generates.

use std::fs;
use std::path::Path;

use rayon::prelude::*;

use podium_csv::load_records;
use podium_types::{LeaderboardConfig, LeaderboardReport, PageStyle, PodiumError, SiteConfig};

use crate::analyze::{analyze_leaderboard, current_record};
use crate::points::points_for;
use crate::render::course::render_course_page;
use crate::render::event::render_event_page;
use crate::render::index::{CourseBest, CourseSummary, EventBest, EventSummary, render_index};

/// Generate every configured page plus the index under `out_dir`.
///
/// # Errors
/// Returns `PodiumError::Io` if the output directory or the index cannot be
/// written. Per-leaderboard failures (missing CSV, unreadable file) are
/// logged at warn level and skip that page only.
pub fn generate_site(config: &SiteConfig, out_dir: &Path) -> Result<(), PodiumError> {
    fs::create_dir_all(out_dir)?;

    let courses: Vec<CourseSummary> = config
        .courses
        .par_iter()
        .filter_map(|lb| log_skipped(lb, build_course(lb, out_dir)))
        .collect();

    let mut events: Vec<EventSummary> = config
        .events
        .par_iter()
        .filter_map(|lb| log_skipped(lb, build_event(lb, out_dir)))
        .collect();

    for pin in &config.pinned {
        events.push(EventSummary {
            name: pin.name.clone(),
            href: None,
            record: Some(EventBest {
                player: pin.player.clone(),
                score: pin.score,
                comma_decimal: false,
                points: pin.points,
                date: pin.date,
            }),
        });
    }

    fs::write(
        out_dir.join("index.html"),
        render_index(&config.title, &courses, &events),
    )?;
    tracing::info!(
        courses = courses.len(),
        events = events.len(),
        "site generated"
    );
    Ok(())
}

fn log_skipped<T>(lb: &LeaderboardConfig, result: Result<T, PodiumError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(leaderboard = %lb.name, error = %e, "skipping page");
            None
        }
    }
}

/// Analyze one leaderboard and write its page; shared by both builders.
fn build_report(
    lb: &LeaderboardConfig,
    out_dir: &Path,
) -> Result<LeaderboardReport, PodiumError> {
    let records = load_records(&lb.csv_file, &lb.columns)?;
    let report = analyze_leaderboard(records, lb.direction);

    let html = match lb.style {
        PageStyle::Simple => render_event_page(&lb.name, &report, lb.direction),
        PageStyle::Advanced => {
            render_course_page(&lb.name, &report, lb.direction, &lb.event_names)
        }
    };

    let path = out_dir.join(&lb.output_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, html)?;
    tracing::debug!(leaderboard = %lb.name, path = %path.display(), "page written");
    Ok(report)
}

fn build_course(lb: &LeaderboardConfig, out_dir: &Path) -> Result<CourseSummary, PodiumError> {
    let report = build_report(lb, out_dir)?;
    let record = current_record(&report.records, lb.direction).map(|r| CourseBest {
        player: r.player.clone(),
        total: r.score,
        splits: r.event_scores,
        bonus: r.bonus,
        date: r.date,
    });
    Ok(CourseSummary {
        name: lb.name.clone(),
        href: lb.output_file.to_string_lossy().into_owned(),
        record,
    })
}

fn build_event(lb: &LeaderboardConfig, out_dir: &Path) -> Result<EventSummary, PodiumError> {
    let report = build_report(lb, out_dir)?;
    let record = current_record(&report.records, lb.direction).map(|r| EventBest {
        player: r.player.clone(),
        score: r.score,
        comma_decimal: lb.comma_decimal,
        points: points_for(&lb.name, r.score),
        date: r.date,
    });
    Ok(EventSummary {
        name: lb.name.clone(),
        href: Some(lb.output_file.to_string_lossy().into_owned()),
        record,
    })
}
