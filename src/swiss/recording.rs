use log::info;

use super::types::{MatchId, NewMatch, PlayerId};
use crate::database::TournamentRepository;
use crate::errors::{TournamentError, TournamentResult};

pub fn register_player<R>(repo: &R, name: &str) -> TournamentResult<PlayerId>
where
    R: TournamentRepository + ?Sized,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::InvalidPlayer(
            "player name must not be empty".to_string(),
        ));
    }

    let id = repo.create_player(name)?;
    info!("Registered player {} as id {}", name, id);
    Ok(id)
}

/// Records a finished match.
///
/// Player ids are not looked up here; unknown ids are left to the storage
/// constraints, and if those are disabled the standings report them later.
pub fn report_match<R>(repo: &R, new_match: &NewMatch) -> TournamentResult<MatchId>
where
    R: TournamentRepository + ?Sized,
{
    validate_match(new_match)?;

    let match_id = repo.create_match(new_match)?;
    info!(
        "Recorded match {}: {} beat {}",
        match_id, new_match.winner, new_match.loser
    );
    Ok(match_id)
}

pub fn validate_match(new_match: &NewMatch) -> TournamentResult<()> {
    if new_match.winner == new_match.loser {
        return Err(TournamentError::InvalidMatch(format!(
            "player {} cannot play against themselves",
            new_match.winner
        )));
    }

    if let (Some(winner_score), Some(loser_score)) =
        (new_match.winner_score, new_match.loser_score)
    {
        if winner_score < loser_score {
            return Err(TournamentError::InvalidMatch(format!(
                "winner score {winner_score} is lower than loser score {loser_score}"
            )));
        }
    }

    Ok(())
}
