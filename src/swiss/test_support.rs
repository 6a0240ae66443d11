use std::cell::RefCell;

use crate::database::{Match, Player, StandingsSnapshot, TournamentRepository};
use crate::errors::{TournamentError, TournamentResult};
use crate::swiss::{MatchId, NewMatch, PlayerId, StandingRow};

/// Vec-backed repository that performs no integrity checks of its own
#[derive(Default)]
pub struct MemoryRepository {
    players: RefCell<Vec<Player>>,
    matches: RefCell<Vec<Match>>,
    pub offline: bool,
}

impl MemoryRepository {
    pub fn with_players(names: &[&str]) -> Self {
        let repo = Self::default();
        for name in names {
            repo.create_player(name).unwrap();
        }
        repo
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn record(&self, winner: PlayerId, loser: PlayerId) {
        self.create_match(&NewMatch::new(winner, loser)).unwrap();
    }

    fn check_online(&self) -> TournamentResult<()> {
        if self.offline {
            return Err(TournamentError::Storage(rusqlite::Error::InvalidQuery));
        }
        Ok(())
    }
}

impl TournamentRepository for MemoryRepository {
    fn create_player(&self, name: &str) -> TournamentResult<PlayerId> {
        self.check_online()?;
        let mut players = self.players.borrow_mut();
        let id = players.last().map_or(1, |p| p.id + 1);
        players.push(Player {
            id,
            name: name.to_string(),
            created_at: None,
        });
        Ok(id)
    }

    fn delete_all_players(&self) -> TournamentResult<()> {
        self.check_online()?;
        self.players.borrow_mut().clear();
        Ok(())
    }

    fn count_players(&self) -> TournamentResult<i64> {
        self.check_online()?;
        Ok(self.players.borrow().len() as i64)
    }

    fn create_match(&self, new_match: &NewMatch) -> TournamentResult<MatchId> {
        self.check_online()?;
        let mut matches = self.matches.borrow_mut();
        let match_id = matches.last().map_or(1, |m| m.match_id + 1);
        matches.push(Match {
            match_id,
            winner: new_match.winner,
            loser: new_match.loser,
            winner_score: new_match.winner_score,
            loser_score: new_match.loser_score,
            created_at: None,
        });
        Ok(match_id)
    }

    fn delete_all_matches(&self) -> TournamentResult<()> {
        self.check_online()?;
        self.matches.borrow_mut().clear();
        Ok(())
    }

    fn count_matches(&self) -> TournamentResult<i64> {
        self.check_online()?;
        Ok(self.matches.borrow().len() as i64)
    }

    fn list_players_with_match_counts(&self) -> TournamentResult<Vec<StandingRow>> {
        self.check_online()?;
        let matches = self.matches.borrow();
        // Storage order on purpose: ranking is the engine's job
        let rows = self
            .players
            .borrow()
            .iter()
            .map(|p| StandingRow {
                id: p.id,
                name: p.name.clone(),
                wins: matches.iter().filter(|m| m.winner == p.id).count() as i64,
                matches_played: matches.iter().filter(|m| m.involves(p.id)).count() as i64,
            })
            .collect();
        Ok(rows)
    }

    fn standings_snapshot(&self) -> TournamentResult<StandingsSnapshot> {
        Ok(StandingsSnapshot {
            rows: self.list_players_with_match_counts()?,
            matches: self.list_matches()?,
        })
    }

    fn list_players(&self) -> TournamentResult<Vec<Player>> {
        self.check_online()?;
        Ok(self.players.borrow().clone())
    }

    fn list_matches(&self) -> TournamentResult<Vec<Match>> {
        self.check_online()?;
        Ok(self.matches.borrow().clone())
    }

    fn reset(&self) -> TournamentResult<()> {
        self.delete_all_matches()?;
        self.delete_all_players()
    }
}
