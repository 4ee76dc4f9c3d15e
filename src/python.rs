//! Python bindings, built with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::WagerError;
use crate::monte_carlo;
use crate::simulator;
use crate::team::Team;
use crate::win_prob::calculate_match_probabilities;

impl From<WagerError> for PyErr {
    fn from(err: WagerError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymethods]
impl Team {
    #[new]
    fn py_new(name: String, attack: f64, defense: f64) -> Self {
        Team::new(name, attack, defense)
    }

    fn __str__(&self) -> String {
        self.describe()
    }

    fn __repr__(&self) -> String {
        format!(
            "Team({:?}, {}, {})",
            self.name, self.attack_strength, self.defense_strength
        )
    }
}

/// Simulate one match, optionally seeded.
#[pyfunction]
#[pyo3(signature = (home, away, seed = None))]
fn simulate_match(home: &Team, away: &Team, seed: Option<u64>) -> (u32, u32) {
    match seed {
        Some(s) => simulator::simulate_seeded(home, away, s),
        None => simulator::simulate_match(home, away, &mut ChaCha8Rng::from_entropy()),
    }
}

/// Exact outcome probabilities as (home_win, draw, away_win).
#[pyfunction]
fn match_probabilities(home: &Team, away: &Team) -> PyResult<(f64, f64, f64)> {
    let probs = calculate_match_probabilities(home, away)?;
    Ok((probs.home_win, probs.draw, probs.away_win))
}

/// Monte Carlo outcome counts as (home_wins, draws, away_wins).
#[pyfunction]
#[pyo3(signature = (home, away, n_simulations, seed = None))]
fn run_simulations(
    home: &Team,
    away: &Team,
    n_simulations: usize,
    seed: Option<u64>,
) -> (usize, usize, usize) {
    let summary = monte_carlo::run_simulations(home, away, n_simulations, seed);
    (summary.home_wins, summary.draws, summary.away_wins)
}

#[pymodule]
fn football_wager(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Team>()?;

    m.add_function(wrap_pyfunction!(simulate_match, m)?)?;
    m.add_function(wrap_pyfunction!(match_probabilities, m)?)?;
    m.add_function(wrap_pyfunction!(run_simulations, m)?)?;

    m.add("CHANCES", crate::constants::CHANCES)?;
    m.add("STAKES", crate::constants::STAKES.to_vec())?;

    Ok(())
}
