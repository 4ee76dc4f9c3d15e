use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::info;

use crate::simulator::simulate_seeded;
use crate::team::Team;

/// Aggregate of repeated simulations of one fixture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationSummary {
    pub simulations: usize,
    pub home_wins: usize,
    pub draws: usize,
    pub away_wins: usize,
    pub total_home_goals: u64,
    pub total_away_goals: u64,
}

impl SimulationSummary {
    fn record(mut self, (home_goals, away_goals): (u32, u32)) -> Self {
        self.simulations += 1;
        match home_goals.cmp(&away_goals) {
            std::cmp::Ordering::Greater => self.home_wins += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
            std::cmp::Ordering::Less => self.away_wins += 1,
        }
        self.total_home_goals += home_goals as u64;
        self.total_away_goals += away_goals as u64;
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.simulations += other.simulations;
        self.home_wins += other.home_wins;
        self.draws += other.draws;
        self.away_wins += other.away_wins;
        self.total_home_goals += other.total_home_goals;
        self.total_away_goals += other.total_away_goals;
        self
    }

    fn ratio(&self, count: u64) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            count as f64 / self.simulations as f64
        }
    }

    pub fn home_win_rate(&self) -> f64 {
        self.ratio(self.home_wins as u64)
    }

    pub fn draw_rate(&self) -> f64 {
        self.ratio(self.draws as u64)
    }

    pub fn away_win_rate(&self) -> f64 {
        self.ratio(self.away_wins as u64)
    }

    pub fn mean_home_goals(&self) -> f64 {
        self.ratio(self.total_home_goals)
    }

    pub fn mean_away_goals(&self) -> f64 {
        self.ratio(self.total_away_goals)
    }
}

/// Run multiple Monte Carlo simulations of `home` against `away`.
///
/// Per-simulation seeds are drawn up front from a master generator, so a
/// given `seed` yields the same summary however rayon schedules the work.
pub fn run_simulations(
    home: &Team,
    away: &Team,
    n_simulations: usize,
    seed: Option<u64>,
) -> SimulationSummary {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let seeds: Vec<u64> = (0..n_simulations).map(|_| rng.gen::<u64>()).collect();

    let summary = seeds
        .par_iter()
        .map(|&sim_seed| simulate_seeded(home, away, sim_seed))
        .fold(SimulationSummary::default, SimulationSummary::record)
        .reduce(SimulationSummary::default, SimulationSummary::merge);

    info!(
        home = %home.name,
        away = %away.name,
        simulations = summary.simulations,
        home_win_rate = summary.home_win_rate(),
        draw_rate = summary.draw_rate(),
        "monte carlo batch complete"
    );
    summary
}
