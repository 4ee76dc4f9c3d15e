use rand::Rng;
use tracing::debug;

use crate::constants::{MAX_STRENGTH, MIN_STRENGTH, TEAM_NAMES};
use crate::team::Team;

/// Build the default four-team registry.
pub fn default_registry<R: Rng>(rng: &mut R) -> Vec<Team> {
    build_registry(&TEAM_NAMES, rng)
}

/// Build a registry from `names`, in order.
///
/// Each team draws its attack strength and then its defense strength
/// uniformly from [MIN_STRENGTH, MAX_STRENGTH] before the next team is built,
/// so the draw order is fixed for a given seed.
pub fn build_registry<R: Rng, S: AsRef<str>>(names: &[S], rng: &mut R) -> Vec<Team> {
    names
        .iter()
        .map(|name| {
            let attack = rng.gen_range(MIN_STRENGTH..=MAX_STRENGTH);
            let defense = rng.gen_range(MIN_STRENGTH..=MAX_STRENGTH);
            let team = Team::new(name.as_ref(), attack, defense);
            debug!(
                team = %team.name,
                attack = team.attack_strength,
                defense = team.defense_strength,
                "registered team"
            );
            team
        })
        .collect()
}
