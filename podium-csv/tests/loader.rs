use podium_csv::{records_from_reader, rows_from_reader};
use podium_types::ColumnMap;

const SAMPLE: &str = "\
Player,Score,Date,Link,Photo
Alice , 57.5 , 12/09/2009 ,http://proof/a, y
Bob,60,someday,http://proof/b,n
Carol,,13/09/2009,http://proof/c,n
Dave,61
Erin,62.5,14/09/2009,http://proof/e,Y
";

fn columns() -> ColumnMap {
    ColumnMap {
        player: 1,
        score: 2,
        date: 3,
        link: 4,
        events: [None, None, None],
        bonus: None,
        photo: Some(5),
    }
}

#[test]
fn header_is_skipped_and_cells_trimmed() {
    let rows = rows_from_reader(SAMPLE.as_bytes()).expect("read rows");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0][0], "Alice");
    assert_eq!(rows[0][1], "57.5");
    assert_eq!(rows[0][2], "12/09/2009");
}

#[test]
fn short_rows_are_tolerated_by_the_reader() {
    let rows = rows_from_reader(SAMPLE.as_bytes()).expect("read rows");
    assert_eq!(rows[3], vec!["Dave".to_string(), "61".to_string()]);
}

#[test]
fn invalid_rows_are_dropped_but_seq_is_preserved() {
    let records = records_from_reader(SAMPLE.as_bytes(), &columns()).expect("load");

    // Bob (bad date), Carol (no score), and Dave (short row) are dropped.
    let players: Vec<&str> = records.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(players, ["Alice", "Erin"]);

    // Sequence indices reflect file position, not the filtered position.
    assert_eq!(records[0].seq, 1);
    assert_eq!(records[1].seq, 5);
}

#[test]
fn photo_flag_is_case_insensitive() {
    let records = records_from_reader(SAMPLE.as_bytes(), &columns()).expect("load");
    assert!(records.iter().all(|r| r.photo));
}

#[test]
fn quoted_comma_decimal_scores_parse() {
    let csv = "Player,Score,Date,Link\nAlice,\"57,5\",12/09/2009,http://x\n";
    let records =
        records_from_reader(csv.as_bytes(), &ColumnMap::new(2, 3, 4)).expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].score, 57.5);
}

#[test]
fn empty_input_yields_no_records() {
    let records =
        records_from_reader("Player,Score,Date,Link\n".as_bytes(), &ColumnMap::new(2, 3, 4))
            .expect("load");
    assert!(records.is_empty());
}
