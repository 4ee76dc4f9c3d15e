/// Scoring chances played per match
pub const CHANCES: u32 = 10;

/// Lower bound for generated attack/defense strengths
pub const MIN_STRENGTH: f64 = 0.4;

/// Upper bound for generated attack/defense strengths
pub const MAX_STRENGTH: f64 = 0.9;

/// Generated odds are drawn from [0, MAX_ODDS]
pub const MAX_ODDS: f64 = 5.0;

/// Stakes available to a bet, in currency units
pub const STAKES: [f64; 10] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];

/// Teams in the default registry, in draw order
pub const TEAM_NAMES: [&str; 4] = [
    "Bengaluru Blues",
    "Kerala Blasters",
    "Bengal Tigers",
    "Goa Warriors",
];
