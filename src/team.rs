#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::rounding::round2;

/// Football team with attack/defense ratings.
///
/// Strengths are on a 0-1 scale and stored rounded to two decimals.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    pub name: String,

    /// Chance-conversion rating: higher means the attacking draw clears more often
    pub attack_strength: f64,

    /// Suppression rating: the opponent must draw above this to score
    pub defense_strength: f64,

    /// League points, always 0 for a single fixture
    pub points: u32,
}

impl Team {
    /// Create a new Team, rounding both strengths to two decimals.
    pub fn new(name: impl Into<String>, attack: f64, defense: f64) -> Self {
        Team {
            name: name.into(),
            attack_strength: round2(attack),
            defense_strength: round2(defense),
            points: 0,
        }
    }

    /// Probability that this team converts a single chance against `opponent`.
    pub fn chance_conversion(&self, opponent: &Team) -> f64 {
        self.attack_strength * (1.0 - opponent.defense_strength)
    }

    /// Console summary, e.g. `Goa Warriors (Attack: 0.61, Defense: 0.75)`
    pub fn describe(&self) -> String {
        format!(
            "{} (Attack: {:.2}, Defense: {:.2})",
            self.name, self.attack_strength, self.defense_strength
        )
    }
}
