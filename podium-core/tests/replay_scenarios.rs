use chrono::NaiveDate;
use podium_core::replay::replay;
use podium_types::{Record, ScoreDirection};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn rec(seq: usize, player: &str, score: f64, date: NaiveDate) -> Record {
    Record {
        seq,
        player: player.to_string(),
        score,
        date,
        link: String::new(),
        photo: false,
        event_scores: [None, None, None],
        bonus: None,
    }
}

#[test]
fn takeover_closes_first_place_interval() {
    let records = vec![
        rec(1, "A", 10.0, d(2020, 1, 1)),
        rec(2, "B", 20.0, d(2020, 1, 11)),
    ];
    let result = replay(&records, ScoreDirection::HigherIsBetter);

    assert_eq!(result.changes.len(), 2);
    let podium = &result.changes[1].podium;
    assert_eq!(podium.len(), 2);
    assert_eq!(podium[0].player, "B");
    assert_eq!(podium[0].score, 20.0);
    assert_eq!(podium[1].player, "A");
    assert_eq!(podium[1].score, 10.0);

    // A held #1 for 10 days; B's tenure opens and closes on the same final date.
    assert_eq!(result.first_place_days["A"], 10);
    assert_eq!(result.first_place_days["B"], 0);

    assert_eq!(result.first_intervals.len(), 2);
    assert_eq!(result.first_intervals[0].player, "A");
    assert_eq!(result.first_intervals[0].start, d(2020, 1, 1));
    assert_eq!(result.first_intervals[0].end, d(2020, 1, 11));
}

#[test]
fn equal_scores_rank_by_sequence_index() {
    let date = d(2021, 6, 1);
    let records = vec![
        rec(1, "A", 50.0, date),
        rec(2, "B", 50.0, date),
        rec(3, "C", 50.0, date),
    ];
    let result = replay(&records, ScoreDirection::HigherIsBetter);

    let podium = &result.changes.last().unwrap().podium;
    let order: Vec<&str> = podium.iter().map(|e| e.player.as_str()).collect();
    assert_eq!(order, ["A", "B", "C"]);
}

#[test]
fn lower_is_better_displaces_on_every_improvement() {
    let records = vec![
        rec(1, "A", 100.0, d(2020, 3, 1)),
        rec(2, "B", 90.0, d(2020, 3, 6)),
        rec(3, "C", 80.0, d(2020, 3, 16)),
    ];
    let result = replay(&records, ScoreDirection::LowerIsBetter);

    assert_eq!(result.changes.len(), 3);
    let leaders: Vec<&str> = result
        .changes
        .iter()
        .map(|c| c.podium[0].player.as_str())
        .collect();
    assert_eq!(leaders, ["A", "B", "C"]);

    assert_eq!(result.first_place_days["A"], 5);
    assert_eq!(result.first_place_days["B"], 10);
    assert_eq!(result.first_place_days["C"], 0);
}

#[test]
fn same_day_takeover_contributes_zero_days() {
    let date = d(2022, 8, 15);
    let records = vec![rec(1, "A", 10.0, date), rec(2, "B", 20.0, date)];
    let result = replay(&records, ScoreDirection::HigherIsBetter);

    assert_eq!(result.first_place_days["A"], 0);
    assert_eq!(result.first_place_days["B"], 0);
}

#[test]
fn reentry_restarts_the_band_clock() {
    let base = d(2020, 1, 1);
    let records = vec![
        rec(1, "A", 100.0, base),
        rec(2, "B", 90.0, base),
        rec(3, "C", 80.0, base),
        // C falls off the podium...
        rec(4, "D", 85.0, d(2020, 1, 11)),
        // ...and re-enters at rank 2 a week later.
        rec(5, "C", 95.0, d(2020, 1, 18)),
    ];
    let result = replay(&records, ScoreDirection::HigherIsBetter);

    let c_intervals: Vec<_> = result
        .band_intervals
        .iter()
        .filter(|iv| iv.player == "C")
        .collect();
    assert_eq!(c_intervals.len(), 2);
    assert_eq!(c_intervals[0].start, base);
    assert_eq!(c_intervals[0].end, d(2020, 1, 11));
    // The second tenure starts at the re-entry date, not the original entry.
    assert_eq!(c_intervals[1].start, d(2020, 1, 18));
    assert_eq!(c_intervals[1].end, d(2020, 1, 18));

    assert_eq!(result.band_days["C"], 10);
}

#[test]
fn band_tenure_survives_composition_churn() {
    let records = vec![
        rec(1, "A", 100.0, d(2020, 1, 1)),
        rec(2, "B", 90.0, d(2020, 1, 6)),
        rec(3, "C", 80.0, d(2020, 1, 11)),
        // D displaces C; B stays in the band and must keep its start date.
        rec(4, "D", 85.0, d(2020, 1, 21)),
        // E displaces B from the band only now.
        rec(5, "E", 95.0, d(2020, 1, 31)),
    ];
    let result = replay(&records, ScoreDirection::HigherIsBetter);

    assert_eq!(result.band_days["B"], 25);
    assert_eq!(result.band_days["C"], 10);
    assert_eq!(result.band_days["D"], 10);
    assert_eq!(result.band_days["E"], 0);
    assert_eq!(result.first_place_days["A"], 30);
}

#[test]
fn short_podiums_are_valid() {
    let records = vec![rec(1, "A", 10.0, d(2020, 1, 1))];
    let result = replay(&records, ScoreDirection::HigherIsBetter);

    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].podium.len(), 1);
    assert_eq!(result.first_place_days["A"], 0);
    assert!(result.band_days.is_empty());
}

#[test]
fn non_qualifying_record_emits_no_event() {
    let records = vec![
        rec(1, "A", 100.0, d(2020, 1, 1)),
        rec(2, "B", 90.0, d(2020, 1, 2)),
        rec(3, "C", 80.0, d(2020, 1, 3)),
        rec(4, "D", 10.0, d(2020, 1, 4)),
    ];
    let result = replay(&records, ScoreDirection::HigherIsBetter);

    assert_eq!(result.changes.len(), 3);
    assert!(!result.first_place_days.contains_key("D"));
    assert!(!result.band_days.contains_key("D"));
}

#[test]
fn duplicate_submissions_are_not_deduplicated() {
    // A improves its own record; both submissions are podium candidates, so
    // A can hold two positions at once.
    let records = vec![
        rec(1, "A", 50.0, d(2020, 1, 1)),
        rec(2, "A", 60.0, d(2020, 1, 5)),
    ];
    let result = replay(&records, ScoreDirection::HigherIsBetter);

    let podium = &result.changes.last().unwrap().podium;
    assert_eq!(podium.len(), 2);
    assert_eq!(podium[0].seq, 2);
    assert_eq!(podium[1].seq, 1);
    assert_eq!(podium[0].player, "A");
    assert_eq!(podium[1].player, "A");

    // Leadership never changed hands, so A's #1 tenure spans the whole batch.
    assert_eq!(result.first_place_days["A"], 4);
}

#[test]
fn empty_batch_yields_empty_result() {
    let result = replay(&[], ScoreDirection::HigherIsBetter);
    assert!(result.changes.is_empty());
    assert!(result.first_place_days.is_empty());
    assert!(result.band_days.is_empty());
}
