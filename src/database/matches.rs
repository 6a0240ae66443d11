use rusqlite::{params, Connection};

use super::models::Match;
use crate::errors::TournamentResult;
use crate::swiss::NewMatch;

pub fn insert_match(conn: &Connection, new_match: &NewMatch) -> TournamentResult<Match> {
    let sql = "INSERT INTO matches (winner, loser, winner_score, loser_score) VALUES (?1, ?2, ?3, ?4) RETURNING match_id, winner, loser, winner_score, loser_score, created_at";

    Ok(conn.query_row(
        sql,
        params![
            new_match.winner,
            new_match.loser,
            new_match.winner_score,
            new_match.loser_score
        ],
        parse_match_row,
    )?)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        match_id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
        winner_score: row.get(3)?,
        loser_score: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn list_all(conn: &Connection) -> TournamentResult<Vec<Match>> {
    let sql = "SELECT match_id, winner, loser, winner_score, loser_score, created_at FROM matches ORDER BY match_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_all(conn: &Connection) -> TournamentResult<i64> {
    Ok(conn.query_row("SELECT COUNT(match_id) FROM matches", [], |row| row.get(0))?)
}

/// Removes every match and restarts the id sequence at 1
pub fn delete_all(conn: &Connection) -> TournamentResult<usize> {
    let deleted = conn.execute("DELETE FROM matches", [])?;
    conn.execute("DELETE FROM sqlite_sequence WHERE name = 'matches'", [])?;
    Ok(deleted)
}
