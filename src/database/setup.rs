use anyhow::{Context, Result};
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const DROP_SQL: &str = "DROP TABLE IF EXISTS matches; DROP TABLE IF EXISTS players";

/// Creates any missing tables. Safe to run against an existing database.
pub fn init_schema(conn: &Connection) -> Result<()> {
    execute_statements(conn, SCHEMA_SQL)?;
    log::info!("Database schema ready");
    Ok(())
}

/// Drops every table and recreates the schema from scratch.
pub fn reset_database(conn: &Connection) -> Result<()> {
    execute_statements(conn, DROP_SQL)?;
    execute_statements(conn, SCHEMA_SQL)?;
    log::info!("Database schema reset successfully");
    Ok(())
}

fn execute_statements(conn: &Connection, sql: &str) -> Result<()> {
    let statements = split_sql_statements(sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('players', 'matches')",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_split_sql_statements() {
        let statements = split_sql_statements("CREATE TABLE a (x INT);\n\n ; CREATE TABLE b (y INT)");
        assert_eq!(statements, vec!["CREATE TABLE a (x INT)", "CREATE TABLE b (y INT)"]);
    }

    #[test]
    fn test_init_schema_is_repeatable() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
        assert_eq!(table_count(&conn), 2);
    }

    #[test]
    fn test_reset_database_clears_rows() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute("INSERT INTO players (name) VALUES (?1)", ["Alice"]).unwrap();

        reset_database(&conn).unwrap();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 0);
        assert_eq!(table_count(&conn), 2);
    }
}
