use std::collections::HashSet;

use log::{debug, warn};

use super::standings::rank_snapshot;
use super::types::{
    OddPolicy, Pairing, PlayerId, RoundPairings, Seat, StandingRow, Unpaired, UnpairedOutcome,
};
use crate::config::settings::PairingSettings;
use crate::database::{Match, TournamentRepository};
use crate::errors::{TournamentError, TournamentResult};

/// Unordered set of player pairs that have already met
#[derive(Debug, Default, Clone)]
pub struct MatchHistory {
    played: HashSet<(PlayerId, PlayerId)>,
}

impl MatchHistory {
    pub fn from_matches(matches: &[Match]) -> Self {
        let played = matches.iter().map(|m| ordered(m.winner, m.loser)).collect();
        Self { played }
    }

    pub fn have_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.played.contains(&ordered(a, b))
    }
}

fn ordered(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Pairs players for the next round from the current standings
pub fn compute_pairings<R>(repo: &R, settings: &PairingSettings) -> TournamentResult<RoundPairings>
where
    R: TournamentRepository + ?Sized,
{
    let snapshot = repo.standings_snapshot()?;
    let standings = rank_snapshot(&snapshot)?;
    let history = if settings.avoid_rematches {
        Some(MatchHistory::from_matches(&snapshot.matches))
    } else {
        None
    };

    let round = pair_standings(&standings, settings.odd_policy, history.as_ref())?;
    debug!(
        "Paired {} players into {} pairings",
        standings.len(),
        round.pairings.len()
    );
    Ok(round)
}

/// Groups ranked rows into pairings.
///
/// Without a history, rows at positions (0,1), (2,3), ... are paired. With a
/// history, each highest-ranked unpaired player takes the next unpaired player
/// they have not met yet, falling back to the adjacent one.
pub fn pair_standings(
    standings: &[StandingRow],
    odd_policy: OddPolicy,
    history: Option<&MatchHistory>,
) -> TournamentResult<RoundPairings> {
    let (field, unpaired) = split_odd_player(standings, odd_policy)?;

    let pairings = match history {
        Some(history) => pair_avoiding_rematches(field, history),
        None => pair_adjacent(field),
    };

    Ok(RoundPairings { pairings, unpaired })
}

fn split_odd_player(
    standings: &[StandingRow],
    odd_policy: OddPolicy,
) -> TournamentResult<(&[StandingRow], Option<Unpaired>)> {
    if standings.len() % 2 == 0 {
        return Ok((standings, None));
    }
    let Some((last, field)) = standings.split_last() else {
        return Ok((standings, None));
    };

    let outcome = match odd_policy {
        OddPolicy::Error => {
            return Err(TournamentError::OddPlayerCount {
                count: standings.len(),
            });
        }
        OddPolicy::Drop => UnpairedOutcome::Dropped,
        OddPolicy::Bye => UnpairedOutcome::Bye,
    };

    warn!(
        "Odd number of players ({}): player {} ({}) is {}",
        standings.len(),
        last.id,
        last.name,
        outcome.as_str()
    );
    Ok((
        field,
        Some(Unpaired {
            seat: Seat::from(last),
            outcome,
        }),
    ))
}

fn pair_adjacent(field: &[StandingRow]) -> Vec<Pairing> {
    field
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect()
}

fn pair_avoiding_rematches(field: &[StandingRow], history: &MatchHistory) -> Vec<Pairing> {
    let mut remaining: Vec<&StandingRow> = field.iter().collect();
    let mut pairings = Vec::with_capacity(field.len() / 2);

    while remaining.len() >= 2 {
        let first = remaining.remove(0);
        let idx = match remaining.iter().position(|c| !history.have_played(first.id, c.id)) {
            Some(idx) => idx,
            None => {
                warn!("No fresh opponent left for player {}, allowing a rematch", first.id);
                0
            }
        };
        let second = remaining.remove(idx);
        pairings.push(Pairing::new(first, second));
    }

    pairings
}
