use serde::{Deserialize, Serialize};

use crate::swiss::{MatchId, NewMatch, OddPolicy, PlayerId};

#[derive(Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCreated {
    pub id: PlayerId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCount {
    pub count: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMatchRequest {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub winner_score: Option<i64>,
    pub loser_score: Option<i64>,
}

impl From<ReportMatchRequest> for NewMatch {
    fn from(request: ReportMatchRequest) -> Self {
        NewMatch {
            winner: request.winner,
            loser: request.loser,
            winner_score: request.winner_score,
            loser_score: request.loser_score,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCreated {
    pub match_id: MatchId,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PairingParams {
    pub odd_policy: Option<OddPolicy>,
    pub avoid_rematches: Option<bool>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}
