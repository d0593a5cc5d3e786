use podium::points::{POINT_CAP, formula_for, points_for};

#[test]
fn hurdle_dash_is_inverse_and_floored() {
    // 11500 / 57.5 = 200 exactly.
    assert_eq!(points_for("Hurdle Dash", 57.5), 200);
    // 11500 / 60 = 191.66.. -> 191.
    assert_eq!(points_for("Hurdle Dash", 60.0), 191);
    assert_eq!(points_for("Hurdle Dash", 115.0), 100);
}

#[test]
fn linear_formulas_scale_and_cap() {
    assert_eq!(points_for("Pennant Capture", 50.0), 150);
    assert_eq!(points_for("Pennant Capture", 100.0), POINT_CAP);
    assert_eq!(points_for("Relay Run", 19.9), 199);
    assert_eq!(points_for("Ring Drop", 100.0), 150);
    assert_eq!(points_for("Snow Throw", 40.0), 120);
    assert_eq!(points_for("Block Smash", 180.0), 180);
}

#[test]
fn disc_catch_is_asymptotic() {
    // 150 - 1500 / (37.5 + 12.5) = 120.
    assert_eq!(points_for("Disc Catch", 37.5), 120);
}

#[test]
fn lamp_jump_divides_and_floors() {
    assert_eq!(points_for("Lamp Jump", 700.0), POINT_CAP);
    assert_eq!(points_for("Lamp Jump", 350.0), 100);
    assert_eq!(points_for("Lamp Jump", 10.0), 2);
}

#[test]
fn goal_roll_adds_position_base() {
    assert_eq!(points_for("Goal Roll", 10.0), 150);
    assert_eq!(points_for("Goal Roll", 30.0), POINT_CAP);
}

#[test]
fn unknown_events_fall_back_to_raw_score() {
    assert_eq!(points_for("Ribbon Twirl", 42.9), 42);
    assert_eq!(points_for("Ribbon Twirl", 450.0), POINT_CAP);
    assert!(formula_for("Ribbon Twirl").is_none());
}

#[test]
fn every_table_entry_is_capped() {
    for f in podium::points::FORMULAS {
        assert!((f.compute)(1e9) <= POINT_CAP, "{} exceeds cap", f.name);
    }
}
