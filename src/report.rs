use crate::betting::{settle, Bet, BetOutcome};

/// Console lines for a settled bet, in print order.
pub fn render(bet: &Bet) -> Vec<String> {
    vec![
        format!("Odds: {:.1}, Stake: ${:.1}", bet.odds, bet.stake),
        bet.home_team.describe(),
        bet.away_team.describe(),
        format!("Home: {}", bet.home_team.name),
        format!("Away: {}", bet.away_team.name),
        format!(
            "Match Result: {} {} - {} {}",
            bet.home_team.name, bet.home_goals, bet.away_goals, bet.away_team.name
        ),
        outcome_line(&settle(bet)),
    ]
}

pub fn outcome_line(outcome: &BetOutcome) -> String {
    match outcome {
        BetOutcome::Won { winnings } => format!("You won the bet! Winnings: ${:.2}", winnings),
        BetOutcome::Lost { stake } => format!("You lost the bet. Stake lost: ${:.2}", stake),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Team;

    fn make_bet(home_goals: u32, away_goals: u32) -> Bet {
        let mut bet = Bet::new(
            Team::new("Kerala Blasters", 0.73, 0.52),
            Team::new("Goa Warriors", 0.6, 0.88),
            2.5,
            50.0,
        );
        bet.record_result((home_goals, away_goals)).unwrap();
        bet
    }

    #[test]
    fn test_render_winning_bet() {
        let lines = render(&make_bet(2, 1));
        assert_eq!(
            lines,
            vec![
                "Odds: 2.5, Stake: $50.0",
                "Kerala Blasters (Attack: 0.73, Defense: 0.52)",
                "Goa Warriors (Attack: 0.60, Defense: 0.88)",
                "Home: Kerala Blasters",
                "Away: Goa Warriors",
                "Match Result: Kerala Blasters 2 - 1 Goa Warriors",
                "You won the bet! Winnings: $125.00",
            ]
        );
    }

    #[test]
    fn test_render_draw_is_lost() {
        let lines = render(&make_bet(1, 1));
        assert_eq!(lines[5], "Match Result: Kerala Blasters 1 - 1 Goa Warriors");
        assert_eq!(lines[6], "You lost the bet. Stake lost: $50.00");
    }

    #[test]
    fn test_zero_odds_still_formats() {
        let line = outcome_line(&BetOutcome::Won { winnings: 0.0 });
        assert_eq!(line, "You won the bet! Winnings: $0.00");
    }
}
