use std::cmp::Ordering;
use std::collections::HashSet;

use log::debug;

use super::types::{PlayerId, StandingRow};
use crate::database::{Match, StandingsSnapshot, TournamentRepository};
use crate::errors::{TournamentError, TournamentResult};

/// Ranks every registered player by wins, breaking ties by player id.
///
/// Rows are recomputed from the repository on every call, from a single
/// snapshot that also carries the match history. The rows are checked against
/// that history so that matches pointing at players that no longer exist are
/// reported instead of silently ignored.
pub fn compute_standings<R>(repo: &R) -> TournamentResult<Vec<StandingRow>>
where
    R: TournamentRepository + ?Sized,
{
    let snapshot = repo.standings_snapshot()?;
    let rows = rank_snapshot(&snapshot)?;
    debug!("Computed standings for {} players", rows.len());
    Ok(rows)
}

/// Validates a snapshot and returns its rows in ranking order
pub fn rank_snapshot(snapshot: &StandingsSnapshot) -> TournamentResult<Vec<StandingRow>> {
    validate_rows(&snapshot.rows)?;
    verify_match_totals(snapshot)?;

    let mut rows = snapshot.rows.clone();
    rank(&mut rows);
    Ok(rows)
}

/// Sorts by wins descending, then id ascending
pub fn rank(rows: &mut [StandingRow]) {
    rows.sort_by(compare_rows);
}

fn compare_rows(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id))
}

fn validate_rows(rows: &[StandingRow]) -> TournamentResult<()> {
    for row in rows {
        if row.wins < 0 || row.matches_played < 0 {
            return Err(TournamentError::MalformedStandings(format!(
                "player {} has negative counts (wins {}, matches {})",
                row.id, row.wins, row.matches_played
            )));
        }
        if row.wins > row.matches_played {
            return Err(TournamentError::MalformedStandings(format!(
                "player {} has {} wins in {} matches",
                row.id, row.wins, row.matches_played
            )));
        }
    }
    Ok(())
}

fn verify_match_totals(snapshot: &StandingsSnapshot) -> TournamentResult<()> {
    let appearances = snapshot.appearances();
    let match_count = snapshot.matches.len() as i64;
    if appearances == 2 * match_count {
        return Ok(());
    }

    let known: HashSet<PlayerId> = snapshot.rows.iter().map(|r| r.id).collect();
    let problem = find_inconsistent_match(&snapshot.matches, &known).unwrap_or_else(|| {
        format!("{match_count} matches recorded but players account for {appearances} appearances")
    });
    Err(TournamentError::MalformedStandings(problem))
}

fn find_inconsistent_match(matches: &[Match], known: &HashSet<PlayerId>) -> Option<String> {
    for recorded in matches {
        if recorded.winner == recorded.loser {
            return Some(format!(
                "match {} lists player {} as both winner and loser",
                recorded.match_id, recorded.winner
            ));
        }
        if let Some(unknown) = [recorded.winner, recorded.loser]
            .into_iter()
            .find(|id| !known.contains(id))
        {
            return Some(format!(
                "match {} references unknown player {}",
                recorded.match_id, unknown
            ));
        }
    }
    None
}
