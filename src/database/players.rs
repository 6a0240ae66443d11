use rusqlite::{params, Connection};

use super::models::Player;
use crate::errors::TournamentResult;
use crate::swiss::StandingRow;

pub fn insert_player(conn: &Connection, name: &str) -> TournamentResult<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    Ok(conn.query_row(sql, params![name], parse_player_row)?)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn list_all(conn: &Connection) -> TournamentResult<Vec<Player>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_all(conn: &Connection) -> TournamentResult<i64> {
    Ok(conn.query_row("SELECT COUNT(id) FROM players", [], |row| row.get(0))?)
}

/// Removes every player and restarts the id sequence at 1
pub fn delete_all(conn: &Connection) -> TournamentResult<usize> {
    let deleted = conn.execute("DELETE FROM players", [])?;
    conn.execute("DELETE FROM sqlite_sequence WHERE name = 'players'", [])?;
    Ok(deleted)
}

/// Every player with their win and appearance counts, players without
/// matches included.
pub fn list_with_match_counts(conn: &Connection) -> TournamentResult<Vec<StandingRow>> {
    let sql = "
        SELECT
            p.id,
            p.name,
            COUNT(CASE WHEN m.winner = p.id THEN 1 END) AS wins,
            COUNT(m.match_id) AS matches_played
        FROM players p
        LEFT JOIN matches m ON p.id IN (m.winner, m.loser)
        GROUP BY p.id, p.name
        ORDER BY wins DESC, p.id ASC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(StandingRow {
                id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                matches_played: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
