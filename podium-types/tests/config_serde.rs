use podium_types::{ColumnMap, LeaderboardConfig, PageStyle, ScoreDirection, SiteConfig};

#[test]
fn column_map_roundtrip() {
    let map = ColumnMap {
        player: 1,
        score: 2,
        date: 7,
        link: 8,
        events: [Some(3), Some(4), Some(5)],
        bonus: Some(6),
        photo: Some(10),
    };

    let json = serde_json::to_string(&map).expect("serialize column map");
    let de: ColumnMap = serde_json::from_str(&json).expect("deserialize column map");

    assert_eq!(de, map);
    assert_eq!(de.min_len(), 7);
}

#[test]
fn column_map_defaults_apply() {
    // Only the mandatory columns given; the rest default.
    let de: ColumnMap =
        serde_json::from_str(r#"{"score": 2, "date": 12, "link": 13}"#).expect("deserialize");

    assert_eq!(de.player, 1);
    assert_eq!(de.events, [None, None, None]);
    assert_eq!(de.bonus, None);
    assert_eq!(de.photo, None);
}

#[test]
fn direction_is_required() {
    // A leaderboard without an explicit direction must not deserialize.
    let json = r#"{
        "name": "Relay Run",
        "csv_file": "csv/events.csv",
        "output_file": "events/relay-run.html",
        "columns": {"score": 8, "date": 12, "link": 13}
    }"#;
    let result: Result<LeaderboardConfig, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn leaderboard_config_roundtrip() {
    let json = r#"{
        "name": "Hurdle Dash",
        "csv_file": "csv/events.csv",
        "output_file": "events/hurdle-dash.html",
        "columns": {"score": 2, "date": 12, "link": 13},
        "direction": "LowerIsBetter",
        "comma_decimal": true
    }"#;
    let lb: LeaderboardConfig = serde_json::from_str(json).expect("deserialize leaderboard");

    assert_eq!(lb.direction, ScoreDirection::LowerIsBetter);
    assert_eq!(lb.style, PageStyle::Simple);
    assert!(lb.comma_decimal);

    let back = serde_json::to_string(&lb).expect("serialize leaderboard");
    let de: LeaderboardConfig = serde_json::from_str(&back).expect("roundtrip");
    assert_eq!(de, lb);
}

#[test]
fn site_config_sections_default_empty() {
    let site: SiteConfig =
        serde_json::from_str(r#"{"title": "World Records"}"#).expect("deserialize site");
    assert!(site.courses.is_empty());
    assert!(site.events.is_empty());
    assert!(site.pinned.is_empty());
}
