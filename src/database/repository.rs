use anyhow::{Context, Result};
use log::info;

use super::connection::{self, DbPool};
use super::models::{Match, Player, StandingsSnapshot};
use super::{matches, players, setup};
use crate::config::settings::DatabaseSettings;
use crate::errors::TournamentResult;
use crate::swiss::{MatchId, NewMatch, PlayerId, StandingRow};

/// Storage operations the standings and pairing engines depend on.
///
/// Each call is a unit of work: it acquires its own connection and releases
/// it before returning, whether the call succeeds or not.
pub trait TournamentRepository {
    fn create_player(&self, name: &str) -> TournamentResult<PlayerId>;

    /// Removes all players and resets the id sequence to start at 1
    fn delete_all_players(&self) -> TournamentResult<()>;

    fn count_players(&self) -> TournamentResult<i64>;

    fn create_match(&self, new_match: &NewMatch) -> TournamentResult<MatchId>;

    /// Removes all matches and resets the id sequence to start at 1
    fn delete_all_matches(&self) -> TournamentResult<()>;

    fn count_matches(&self) -> TournamentResult<i64>;

    fn list_players_with_match_counts(&self) -> TournamentResult<Vec<StandingRow>>;

    /// Player counts and the full match history, read from one consistent
    /// view of the store so concurrent writes cannot split them
    fn standings_snapshot(&self) -> TournamentResult<StandingsSnapshot>;

    fn list_players(&self) -> TournamentResult<Vec<Player>>;

    fn list_matches(&self) -> TournamentResult<Vec<Match>>;

    /// Removes all matches, then all players, as a single unit
    fn reset(&self) -> TournamentResult<()>;
}

pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the database file and makes sure the schema exists
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = connection::create_pool(settings)?;
        let repository = Self::with_schema(pool)?;
        info!("Opened tournament database at {}", settings.path);
        Ok(repository)
    }

    pub fn open_in_memory(enforce_foreign_keys: bool) -> Result<Self> {
        let pool = connection::create_memory_pool(enforce_foreign_keys)?;
        Self::with_schema(pool)
    }

    fn with_schema(pool: DbPool) -> Result<Self> {
        let conn = connection::get_connection(&pool)
            .context("Failed to get database connection from pool")?;
        setup::create_schema(&conn)?;
        drop(conn);
        Ok(Self::new(pool))
    }
}

impl TournamentRepository for SqliteRepository {
    fn create_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let conn = connection::get_connection(&self.pool)?;
        let player = players::insert_player(&conn, name)?;
        Ok(player.id)
    }

    fn delete_all_players(&self) -> TournamentResult<()> {
        let mut conn = connection::get_connection(&self.pool)?;
        let tx = conn.transaction()?;
        let deleted = players::delete_all(&tx)?;
        tx.commit()?;
        info!("Deleted {} players", deleted);
        Ok(())
    }

    fn count_players(&self) -> TournamentResult<i64> {
        let conn = connection::get_connection(&self.pool)?;
        players::count_all(&conn)
    }

    fn create_match(&self, new_match: &NewMatch) -> TournamentResult<MatchId> {
        let mut conn = connection::get_connection(&self.pool)?;
        let tx = conn.transaction()?;
        let recorded = matches::insert_match(&tx, new_match)?;
        tx.commit()?;
        Ok(recorded.match_id)
    }

    fn delete_all_matches(&self) -> TournamentResult<()> {
        let mut conn = connection::get_connection(&self.pool)?;
        let tx = conn.transaction()?;
        let deleted = matches::delete_all(&tx)?;
        tx.commit()?;
        info!("Deleted {} matches", deleted);
        Ok(())
    }

    fn count_matches(&self) -> TournamentResult<i64> {
        let conn = connection::get_connection(&self.pool)?;
        matches::count_all(&conn)
    }

    fn list_players_with_match_counts(&self) -> TournamentResult<Vec<StandingRow>> {
        let conn = connection::get_connection(&self.pool)?;
        players::list_with_match_counts(&conn)
    }

    fn standings_snapshot(&self) -> TournamentResult<StandingsSnapshot> {
        let mut conn = connection::get_connection(&self.pool)?;
        let tx = conn.transaction()?;
        let rows = players::list_with_match_counts(&tx)?;
        let matches = matches::list_all(&tx)?;
        tx.commit()?;
        Ok(StandingsSnapshot { rows, matches })
    }

    fn list_players(&self) -> TournamentResult<Vec<Player>> {
        let conn = connection::get_connection(&self.pool)?;
        players::list_all(&conn)
    }

    fn list_matches(&self) -> TournamentResult<Vec<Match>> {
        let conn = connection::get_connection(&self.pool)?;
        matches::list_all(&conn)
    }

    fn reset(&self) -> TournamentResult<()> {
        let mut conn = connection::get_connection(&self.pool)?;
        let tx = conn.transaction()?;
        let deleted_matches = matches::delete_all(&tx)?;
        let deleted_players = players::delete_all(&tx)?;
        tx.commit()?;
        info!(
            "Tournament reset: removed {} matches and {} players",
            deleted_matches, deleted_players
        );
        Ok(())
    }
}
