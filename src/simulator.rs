use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::constants::CHANCES;
use crate::team::Team;

/// Simulate a match and return `(home_goals, away_goals)`.
///
/// Each of the `CHANCES` scoring chances is attempted by both sides. A side
/// scores when its first draw falls below its attack strength and its second
/// draw lands above the opponent's defense strength. Home and away are
/// evaluated independently, so both may score on the same chance. Every
/// chance consumes four draws (home pair, then away pair) regardless of the
/// outcome.
pub fn simulate_match<R: Rng>(home: &Team, away: &Team, rng: &mut R) -> (u32, u32) {
    let mut home_goals = 0;
    let mut away_goals = 0;

    for chance in 0..CHANCES {
        let home_scored = attempt(home, away, rng);
        let away_scored = attempt(away, home, rng);

        if home_scored {
            home_goals += 1;
        }
        if away_scored {
            away_goals += 1;
        }
        trace!(chance, home_scored, away_scored, "chance played");
    }

    debug!(
        home = %home.name,
        away = %away.name,
        home_goals,
        away_goals,
        "match simulated"
    );
    (home_goals, away_goals)
}

/// Simulate a match with a fresh ChaCha8 generator seeded from `seed`.
pub fn simulate_seeded(home: &Team, away: &Team, seed: u64) -> (u32, u32) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    simulate_match(home, away, &mut rng)
}

// Both draws are taken before comparing so the draw count never depends on
// the first comparison.
fn attempt<R: Rng>(attacker: &Team, defender: &Team, rng: &mut R) -> bool {
    let attack_draw = rng.gen::<f64>();
    let defense_draw = rng.gen::<f64>();
    attack_draw < attacker.attack_strength && defense_draw > defender.defense_strength
}
