use thiserror::Error;

/// Errors raised by tournament operations
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Query failure or constraint violation reported by SQLite
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// No connection could be checked out of the pool
    #[error("Storage unavailable: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Invalid match: {0}")]
    InvalidMatch(String),

    #[error("Invalid player: {0}")]
    InvalidPlayer(String),

    #[error("Cannot pair an odd number of players ({count})")]
    OddPlayerCount { count: usize },

    /// Stored match history is inconsistent with the registered players
    #[error("Malformed standings: {0}")]
    MalformedStandings(String),
}

impl TournamentError {
    /// True for failures coming from the repository rather than from validation
    pub fn is_storage(&self) -> bool {
        matches!(self, TournamentError::Storage(_) | TournamentError::Pool(_))
    }
}

pub type TournamentResult<T> = Result<T, TournamentError>;
