//! Betting engine.
//!
//! Stateless operations for drawing bet parameters and settling a bet
//! against a simulated scoreline. Every function takes the random source
//! explicitly so a fixed seed reproduces the whole bet.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::constants::{MAX_ODDS, STAKES};
use crate::error::{Result, WagerError};
use crate::rounding::{round1, round2};
use crate::team::Team;

/// A wager on the home side of a single fixture.
#[derive(Clone, Debug, PartialEq)]
pub struct Bet {
    pub home_team: Team,
    pub away_team: Team,
    pub home_goals: u32,
    pub away_goals: u32,
    pub odds: f64,
    pub stake: f64,
    recorded: bool,
}

impl Bet {
    /// Create a bet with no result yet (0 - 0).
    pub fn new(home_team: Team, away_team: Team, odds: f64, stake: f64) -> Self {
        Bet {
            home_team,
            away_team,
            home_goals: 0,
            away_goals: 0,
            odds,
            stake,
            recorded: false,
        }
    }

    /// Store the simulated score. A bet takes exactly one result.
    pub fn record_result(&mut self, (home_goals, away_goals): (u32, u32)) -> Result<()> {
        if self.recorded {
            return Err(WagerError::ResultAlreadyRecorded);
        }
        self.home_goals = home_goals;
        self.away_goals = away_goals;
        self.recorded = true;
        Ok(())
    }

    #[cfg(test)]
    fn has_result(&self) -> bool {
        self.recorded
    }
}

/// Settlement of a bet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BetOutcome {
    /// Home side won; `winnings` is stake × odds.
    Won { winnings: f64 },
    /// Draw or away win; the stake is forfeited.
    Lost { stake: f64 },
}

impl BetOutcome {
    pub fn is_won(&self) -> bool {
        matches!(self, BetOutcome::Won { .. })
    }
}

/// Draw odds uniformly from [0, MAX_ODDS], rounded to one decimal.
pub fn generate_odds<R: Rng>(rng: &mut R) -> f64 {
    round1(rng.gen_range(0.0..=MAX_ODDS))
}

/// Pick one of the fixed stakes uniformly.
pub fn select_stake<R: Rng>(rng: &mut R) -> f64 {
    // STAKES is a non-empty const array
    *STAKES.choose(rng).unwrap_or(&STAKES[0])
}

/// Pick distinct `(home, away)` indices into `teams`.
///
/// The home index is drawn first; the away index is redrawn until it
/// differs. Needs at least two teams.
pub fn select_teams<R: Rng>(teams: &[Team], rng: &mut R) -> Result<(usize, usize)> {
    if teams.len() < 2 {
        return Err(WagerError::NotEnoughTeams { count: teams.len() });
    }

    let home = rng.gen_range(0..teams.len());
    let mut away = rng.gen_range(0..teams.len());
    while away == home {
        away = rng.gen_range(0..teams.len());
    }
    Ok((home, away))
}

/// Place a bet: teams first, then odds, then stake.
pub fn place_bet<R: Rng>(teams: &[Team], rng: &mut R) -> Result<Bet> {
    let (home, away) = select_teams(teams, rng)?;
    let odds = generate_odds(rng);
    let stake = select_stake(rng);

    debug!(
        home = %teams[home].name,
        away = %teams[away].name,
        odds,
        stake,
        "bet placed"
    );
    Ok(Bet::new(teams[home].clone(), teams[away].clone(), odds, stake))
}

/// Settle a bet on the home side. A draw loses.
pub fn settle(bet: &Bet) -> BetOutcome {
    if bet.home_goals > bet.away_goals {
        BetOutcome::Won {
            winnings: round2(bet.stake * bet.odds),
        }
    } else {
        BetOutcome::Lost { stake: bet.stake }
    }
}
