use statrs::distribution::{Binomial, Discrete};

use crate::constants::CHANCES;
use crate::error::{Result, WagerError};
use crate::team::Team;

/// Exact outcome distribution of a fixture under the chance model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchProbabilities {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
    pub expected_home_goals: f64,
    pub expected_away_goals: f64,
}

impl MatchProbabilities {
    /// Decimal odds at which a home bet breaks even.
    ///
    /// Infinite when the home side cannot win.
    pub fn fair_home_odds(&self) -> f64 {
        if self.home_win > 0.0 {
            1.0 / self.home_win
        } else {
            f64::INFINITY
        }
    }

    /// Expected payout of a home bet at `odds` with `stake`.
    pub fn expected_payout(&self, odds: f64, stake: f64) -> f64 {
        self.home_win * stake * odds
    }
}

/// Calculate outcome probabilities for `home` against `away`.
///
/// Each side converts a chance with probability attack × (1 − opposing
/// defense), independently of the other side, so goal counts are
/// Binomial(CHANCES, p) and the joint distribution is their product.
///
/// # Returns
/// Home win / draw / away win probabilities (summing to 1) and expected goals.
pub fn calculate_match_probabilities(home: &Team, away: &Team) -> Result<MatchProbabilities> {
    let p_home = home.chance_conversion(away).clamp(0.0, 1.0);
    let p_away = away.chance_conversion(home).clamp(0.0, 1.0);

    let home_dist = goal_distribution(p_home)?;
    let away_dist = goal_distribution(p_away)?;

    let mut home_win = 0.0;
    let mut draw = 0.0;
    let mut away_win = 0.0;

    for (h, &ph) in home_dist.iter().enumerate() {
        for (a, &pa) in away_dist.iter().enumerate() {
            let joint = ph * pa;
            if h > a {
                home_win += joint;
            } else if h == a {
                draw += joint;
            } else {
                away_win += joint;
            }
        }
    }

    Ok(MatchProbabilities {
        home_win,
        draw,
        away_win,
        expected_home_goals: CHANCES as f64 * p_home,
        expected_away_goals: CHANCES as f64 * p_away,
    })
}

/// P(goals = k) for k in 0..=CHANCES.
fn goal_distribution(p: f64) -> Result<Vec<f64>> {
    let binomial =
        Binomial::new(p, CHANCES as u64).map_err(|e| WagerError::Distribution(e.to_string()))?;
    Ok((0..=CHANCES as u64).map(|k| binomial.pmf(k)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_teams_symmetric() {
        let team1 = Team::new("A", 0.6, 0.6);
        let team2 = Team::new("B", 0.6, 0.6);

        let probs = calculate_match_probabilities(&team1, &team2).unwrap();
        assert!((probs.home_win - probs.away_win).abs() < 1e-12);
        assert!(probs.draw > 0.0);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let home = Team::new("Goa Warriors", 0.85, 0.42);
        let away = Team::new("Bengal Tigers", 0.47, 0.66);

        let probs = calculate_match_probabilities(&home, &away).unwrap();
        let total = probs.home_win + probs.draw + probs.away_win;
        assert!((total - 1.0).abs() < 1e-10, "total was {}", total);
    }

    #[test]
    fn test_stronger_team_favored() {
        let strong = Team::new("Strong", 0.9, 0.85);
        let weak = Team::new("Weak", 0.4, 0.4);

        let probs = calculate_match_probabilities(&strong, &weak).unwrap();
        assert!(probs.home_win > 0.7);
        assert!(probs.home_win > probs.away_win);
    }

    #[test]
    fn test_swapping_sides_mirrors_result() {
        let team1 = Team::new("Kerala Blasters", 0.55, 0.7);
        let team2 = Team::new("Bengaluru Blues", 0.8, 0.45);

        let forward = calculate_match_probabilities(&team1, &team2).unwrap();
        let reverse = calculate_match_probabilities(&team2, &team1).unwrap();
        assert!((forward.home_win - reverse.away_win).abs() < 1e-12);
        assert!((forward.draw - reverse.draw).abs() < 1e-12);
    }

    #[test]
    fn test_zero_attack_cannot_win() {
        let blunt = Team::new("Blunt", 0.0, 0.5);
        let other = Team::new("Other", 0.5, 0.5);

        let probs = calculate_match_probabilities(&blunt, &other).unwrap();
        assert!(probs.home_win < 1e-12);
        assert_eq!(probs.expected_home_goals, 0.0);
    }

    #[test]
    fn test_expected_goals() {
        let home = Team::new("A", 0.8, 0.5);
        let away = Team::new("B", 0.6, 0.25);

        let probs = calculate_match_probabilities(&home, &away).unwrap();
        assert!((probs.expected_home_goals - 6.0).abs() < 1e-9);
        assert!((probs.expected_away_goals - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_expected_payout_and_fair_odds() {
        let probs = MatchProbabilities {
            home_win: 0.4,
            draw: 0.2,
            away_win: 0.4,
            expected_home_goals: 3.0,
            expected_away_goals: 3.0,
        };
        assert!((probs.fair_home_odds() - 2.5).abs() < 1e-12);
        assert!((probs.expected_payout(2.5, 50.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_fair_odds_infinite_when_home_cannot_win() {
        let probs = MatchProbabilities {
            home_win: 0.0,
            draw: 0.5,
            away_win: 0.5,
            expected_home_goals: 0.0,
            expected_away_goals: 1.0,
        };
        assert!(probs.fair_home_odds().is_infinite());
    }
}
