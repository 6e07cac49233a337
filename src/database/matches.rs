use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Match;
use crate::swiss::types::PlayerId;

pub fn insert_match(
    conn: &Connection,
    winner_id: PlayerId,
    loser_id: PlayerId,
    round: Option<i32>,
) -> Result<Match> {
    let sql = "INSERT INTO matches (winner_id, loser_id, round) VALUES (?1, ?2, ?3) RETURNING id, winner_id, loser_id, round, created_at";

    conn.query_row(sql, params![winner_id, loser_id, round], parse_match_row)
        .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        round: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<Match>> {
    let sql = "SELECT id, winner_id, loser_id, round, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}
