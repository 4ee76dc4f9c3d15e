//! Plays one fixture between two randomly chosen teams and settles a bet on
//! the home side.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use football_wager::{
    calculate_match_probabilities, default_registry, place_bet, report, settle, simulate_match,
    AppConfig,
};

fn main() -> Result<()> {
    let cfg = AppConfig::from_env();
    init_logging(&cfg);

    let mut rng = ChaCha8Rng::from_entropy();

    let teams = default_registry(&mut rng);
    let mut bet = place_bet(&teams, &mut rng)?;

    let result = simulate_match(&bet.home_team, &bet.away_team, &mut rng);
    bet.record_result(result)?;

    // Model view only, no draws taken
    match calculate_match_probabilities(&bet.home_team, &bet.away_team) {
        Ok(probs) => debug!(
            home_win = probs.home_win,
            draw = probs.draw,
            fair_odds = probs.fair_home_odds(),
            expected_payout = probs.expected_payout(bet.odds, bet.stake),
            "model probabilities"
        ),
        Err(e) => debug!(error = %e, "probabilities unavailable"),
    }

    for line in report::render(&bet) {
        println!("{line}");
    }

    info!(won = settle(&bet).is_won(), "bet settled");
    Ok(())
}

fn init_logging(cfg: &AppConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_new(&cfg.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(football_wager::config::DEFAULT_LOG_FILTER));

    // stdout carries the match report, logs go to stderr
    if cfg.log_json {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    }
}
