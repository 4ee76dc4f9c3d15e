//! Football Wager - single-fixture match simulation and bet settlement.
//!
//! Teams carry attack/defense strengths; a match is ten scoring chances
//! resolved with an injected random source, and a bet on the home side is
//! settled against the simulated score. Exact outcome probabilities and
//! parallel Monte Carlo batches are provided alongside, with optional
//! Python bindings via PyO3.

pub mod betting;
pub mod config;
pub mod constants;
pub mod error;
pub mod monte_carlo;
pub mod registry;
pub mod report;
pub mod rounding;
pub mod simulator;
pub mod team;
pub mod win_prob;

#[cfg(feature = "python")]
mod python;

pub use betting::{generate_odds, place_bet, select_stake, select_teams, settle, Bet, BetOutcome};
pub use config::AppConfig;
pub use constants::{CHANCES, MAX_ODDS, MAX_STRENGTH, MIN_STRENGTH, STAKES, TEAM_NAMES};
pub use error::WagerError;
pub use monte_carlo::{run_simulations, SimulationSummary};
pub use registry::{build_registry, default_registry};
pub use rounding::{round1, round2, round_to};
pub use simulator::{simulate_match, simulate_seeded};
pub use team::Team;
pub use win_prob::{calculate_match_probabilities, MatchProbabilities};
