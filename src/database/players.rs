use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::Player;
use crate::swiss::types::PlayerId;

pub fn insert_player(conn: &Connection, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let sql = "SELECT COUNT(*) FROM players";
    let count: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .context("Failed to count players")?;
    Ok(count as usize)
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to delete players")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::init_schema;

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_assigns_fresh_ids() {
        let conn = open();
        let alice = insert_player(&conn, "Alice").unwrap();
        let bob = insert_player(&conn, "Alice").unwrap();

        assert_ne!(alice.id, bob.id);
        assert_eq!(bob.name, "Alice");
        assert!(alice.created_at.is_some());
    }

    #[test]
    fn test_name_is_stored_verbatim() {
        let conn = open();
        let name = "Robert'); DROP TABLE players;--";

        let inserted = insert_player(&conn, name).unwrap();
        let found = find_by_id(&conn, inserted.id).unwrap().unwrap();

        assert_eq!(found.name, name);
        assert_eq!(count(&conn).unwrap(), 1);
    }

    #[test]
    fn test_find_missing_player() {
        let conn = open();
        assert!(find_by_id(&conn, 42).unwrap().is_none());
    }

    #[test]
    fn test_blank_name_violates_schema() {
        let conn = open();
        assert!(insert_player(&conn, "   ").is_err());
    }

    #[test]
    fn test_list_and_delete() {
        let conn = open();
        insert_player(&conn, "Bob").unwrap();
        insert_player(&conn, "Alice").unwrap();

        let names: Vec<String> = list_all(&conn).unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);

        assert_eq!(delete_all(&conn).unwrap(), 2);
        assert_eq!(count(&conn).unwrap(), 0);
    }
}
