use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type MatchId = i64;

/// One player's line in the standings, derived from the match history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches_played: i64,
}

/// A match result about to be recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub winner_score: Option<i64>,
    pub loser_score: Option<i64>,
}

impl NewMatch {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            winner,
            loser,
            winner_score: None,
            loser_score: None,
        }
    }

    pub fn with_scores(mut self, winner_score: i64, loser_score: i64) -> Self {
        self.winner_score = Some(winner_score);
        self.loser_score = Some(loser_score);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
}

impl From<&StandingRow> for Seat {
    fn from(row: &StandingRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
        }
    }
}

/// Two players facing each other next round; `first` is ranked higher or equal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub first: Seat,
    pub second: Seat,
}

impl Pairing {
    pub fn new(first: &StandingRow, second: &StandingRow) -> Self {
        Self {
            first: Seat::from(first),
            second: Seat::from(second),
        }
    }

    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.first.id, self.second.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnpairedOutcome {
    Dropped,
    Bye,
}

impl UnpairedOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            UnpairedOutcome::Dropped => "dropped",
            UnpairedOutcome::Bye => "bye",
        }
    }
}

/// The player left over when the field has an odd size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unpaired {
    pub seat: Seat,
    pub outcome: UnpairedOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPairings {
    pub pairings: Vec<Pairing>,
    pub unpaired: Option<Unpaired>,
}

impl RoundPairings {
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty() && self.unpaired.is_none()
    }
}

/// What to do with the lowest-ranked player when the field is odd
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OddPolicy {
    /// Leave the player out of the round
    Drop,
    /// Give the lowest-ranked player a bye. Byes are not recorded, so the
    /// same player gets it every round they stay at the bottom
    Bye,
    /// Refuse to pair
    #[default]
    Error,
}

impl OddPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            OddPolicy::Drop => "drop",
            OddPolicy::Bye => "bye",
            OddPolicy::Error => "error",
        }
    }
}

impl fmt::Display for OddPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OddPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drop" => Ok(OddPolicy::Drop),
            "bye" => Ok(OddPolicy::Bye),
            "error" => Ok(OddPolicy::Error),
            other => Err(format!("unknown odd-player policy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_policy_parsing() {
        assert_eq!("drop".parse::<OddPolicy>(), Ok(OddPolicy::Drop));
        assert_eq!(" BYE ".parse::<OddPolicy>(), Ok(OddPolicy::Bye));
        assert_eq!("error".parse::<OddPolicy>(), Ok(OddPolicy::Error));
        assert!("skip".parse::<OddPolicy>().is_err());
        assert_eq!(OddPolicy::default(), OddPolicy::Error);
    }

    #[test]
    fn test_standing_row_serializes_camel_case() {
        let row = StandingRow {
            id: 1,
            name: "Ada".to_string(),
            wins: 2,
            matches_played: 3,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["matchesPlayed"], 3);
        assert_eq!(json["wins"], 2);
    }
}
