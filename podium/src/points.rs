//! Per-event score-to-points formulas.
//!
//! Modeled as a lookup table from event name to a pure numeric function, so
//! adding an event is a table entry, not another branch. Every formula clamps
//! to the 200-point cap.

/// Maximum points any single event can award.
pub const POINT_CAP: i64 = 200;

/// A pure score-to-points conversion.
pub type Formula = fn(f64) -> i64;

/// One event's formula and its display notation (TeX) for the index page.
pub struct EventFormula {
    /// Event display name, the lookup key.
    pub name: &'static str,
    /// Points computation.
    pub compute: Formula,
    /// Human-readable notation rendered on the index page.
    pub notation: &'static str,
}

fn capped(value: f64) -> i64 {
    // Saturating float-to-int cast, truncating like the scoreboard does.
    (value as i64).min(POINT_CAP)
}

fn hurdle_dash(s: f64) -> i64 {
    capped(11_500.0 / s)
}

fn pennant_capture(s: f64) -> i64 {
    capped(s * 3.0)
}

fn circle_push(s: f64) -> i64 {
    capped(s * 3.0)
}

fn block_smash(s: f64) -> i64 {
    capped(s)
}

fn disc_catch(s: f64) -> i64 {
    capped(150.0 - 1_500.0 / (s + 12.5))
}

fn lamp_jump(s: f64) -> i64 {
    capped(s / 3.5)
}

fn relay_run(s: f64) -> i64 {
    capped(s * 10.0)
}

fn ring_drop(s: f64) -> i64 {
    capped(s * 1.5)
}

fn snow_throw(s: f64) -> i64 {
    capped(s * 3.0)
}

fn goal_roll(s: f64) -> i64 {
    capped(100.0 + 5.0 * s)
}

/// The formula table, keyed by event display name.
pub const FORMULAS: &[EventFormula] = &[
    EventFormula {
        name: "Hurdle Dash",
        compute: hurdle_dash,
        notation: r"\( \left\lfloor \frac{11500}{\text{score}} \right\rfloor \)",
    },
    EventFormula {
        name: "Pennant Capture",
        compute: pennant_capture,
        notation: r"\( \text{score} \times 3 \)",
    },
    EventFormula {
        name: "Circle Push",
        compute: circle_push,
        notation: r"\( \text{score} \times 3 \)",
    },
    EventFormula {
        name: "Block Smash",
        compute: block_smash,
        notation: r"\( \text{score} \)",
    },
    EventFormula {
        name: "Disc Catch",
        compute: disc_catch,
        notation: r"\( 150 - \frac{1500}{\text{score} + 12.5} \)",
    },
    EventFormula {
        name: "Lamp Jump",
        compute: lamp_jump,
        notation: r"\( \left\lfloor \frac{\text{score}}{3.5} \right\rfloor \)",
    },
    EventFormula {
        name: "Relay Run",
        compute: relay_run,
        notation: r"\( \text{score} \times 10 \)",
    },
    EventFormula {
        name: "Ring Drop",
        compute: ring_drop,
        notation: r"\( \text{score} \times 1.5 \)",
    },
    EventFormula {
        name: "Snow Throw",
        compute: snow_throw,
        notation: r"\( \text{score} \times 3 \)",
    },
    EventFormula {
        name: "Goal Roll",
        compute: goal_roll,
        notation: r"\( 100 + \text{score} \times 5 \)",
    },
];

/// Look up an event's formula entry.
#[must_use]
pub fn formula_for(event: &str) -> Option<&'static EventFormula> {
    FORMULAS.iter().find(|f| f.name == event)
}

/// Convert a raw score to points for `event`.
///
/// Unknown events fall back to the raw score under the cap.
#[must_use]
pub fn points_for(event: &str, score: f64) -> i64 {
    formula_for(event).map_or_else(|| capped(score), |f| (f.compute)(score))
}
