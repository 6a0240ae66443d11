use chrono::NaiveDateTime;
use serde::Serialize;

use crate::swiss::{MatchId, PlayerId, StandingRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub winner_score: Option<i64>,
    pub loser_score: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
}

impl Match {
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.winner == player_id || self.loser == player_id
    }
}

/// Standings rows together with the match history they were counted from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandingsSnapshot {
    pub rows: Vec<StandingRow>,
    pub matches: Vec<Match>,
}

impl StandingsSnapshot {
    /// Total matches played summed over every row
    pub fn appearances(&self) -> i64 {
        self.rows.iter().map(|r| r.matches_played).sum()
    }
}
