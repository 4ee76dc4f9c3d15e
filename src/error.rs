use thiserror::Error;

/// Errors raised by the betting engine and the probability model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WagerError {
    /// Team selection needs two distinct entries to pick from.
    #[error("at least 2 teams are required to place a bet, registry has {count}")]
    NotEnoughTeams { count: usize },

    #[error("match result has already been recorded for this bet")]
    ResultAlreadyRecorded,

    #[error("invalid distribution parameter: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, WagerError>;
