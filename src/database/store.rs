use anyhow::{Context, Result};
use log::debug;

use super::connection::{create_memory_pool, create_pool, get_connection, DbPool};
use super::repository::Repository;
use super::{matches, players, setup};
use crate::domain::{Match, Player, TournamentSnapshot};
use crate::swiss::types::PlayerId;

/// SQLite-backed repository. Each call checks a connection out of the pool
/// and hands it back when the call returns.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens (or creates) the database file and makes sure the schema exists.
    pub fn open(database_path: &str) -> Result<Self> {
        let repository = Self::new(create_pool(database_path)?);
        repository.init_schema()?;
        debug!("Opened tournament database at {}", database_path);
        Ok(repository)
    }

    pub fn open_in_memory() -> Result<Self> {
        let repository = Self::new(create_memory_pool()?);
        repository.init_schema()?;
        Ok(repository)
    }

    pub fn init_schema(&self) -> Result<()> {
        let conn = get_connection(&self.pool)?;
        setup::init_schema(&conn)
    }

    pub fn reset_schema(&self) -> Result<()> {
        let conn = get_connection(&self.pool)?;
        setup::reset_database(&conn)
    }
}

impl Repository for SqliteRepository {
    fn create_player(&self, name: &str) -> Result<Player> {
        let conn = get_connection(&self.pool)?;
        players::insert_player(&conn, name)
    }

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let conn = get_connection(&self.pool)?;
        players::find_by_id(&conn, id)
    }

    fn count_players(&self) -> Result<usize> {
        let conn = get_connection(&self.pool)?;
        players::count(&conn)
    }

    fn get_all_players(&self) -> Result<Vec<Player>> {
        let conn = get_connection(&self.pool)?;
        players::list_all(&conn)
    }

    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId, round: Option<i32>) -> Result<Match> {
        let conn = get_connection(&self.pool)?;
        matches::insert_match(&conn, winner_id, loser_id, round)
    }

    fn get_all_matches(&self) -> Result<Vec<Match>> {
        let conn = get_connection(&self.pool)?;
        matches::list_all(&conn)
    }

    fn delete_all_matches(&self) -> Result<()> {
        let conn = get_connection(&self.pool)?;
        let deleted = matches::delete_all(&conn)?;
        debug!("Deleted {} matches", deleted);
        Ok(())
    }

    fn delete_all_players(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to begin transaction")?;
        let deleted_matches = matches::delete_all(&tx)?;
        let deleted_players = players::delete_all(&tx)?;
        tx.commit().context("Failed to commit player deletion")?;
        debug!("Deleted {} players and {} matches", deleted_players, deleted_matches);
        Ok(())
    }

    fn load_snapshot(&self) -> Result<TournamentSnapshot> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to begin transaction")?;
        let all_players = players::list_all(&tx)?;
        let all_matches = matches::list_all(&tx)?;
        tx.commit().context("Failed to finish snapshot read")?;
        Ok(TournamentSnapshot::new(all_players, all_matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_sees_players_and_matches() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let alice = repo.create_player("Alice").unwrap();
        let bob = repo.create_player("Bob").unwrap();
        repo.record_match(alice.id, bob.id, Some(1)).unwrap();

        let snapshot = repo.load_snapshot().unwrap();

        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.matches.len(), 1);
        assert_eq!(snapshot.last_round(), Some(1));
    }

    #[test]
    fn test_delete_all_players_removes_matches() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let alice = repo.create_player("Alice").unwrap();
        let bob = repo.create_player("Bob").unwrap();
        repo.record_match(alice.id, bob.id, None).unwrap();

        repo.delete_all_players().unwrap();
        repo.delete_all_players().unwrap();

        assert_eq!(repo.count_players().unwrap(), 0);
        assert!(repo.get_all_matches().unwrap().is_empty());
    }

    #[test]
    fn test_failed_insert_leaves_no_row() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let alice = repo.create_player("Alice").unwrap();

        assert!(repo.record_match(alice.id, 404, None).is_err());
        assert!(repo.get_all_matches().unwrap().is_empty());
    }

    #[test]
    fn test_reset_schema() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.create_player("Alice").unwrap();

        repo.reset_schema().unwrap();

        assert_eq!(repo.count_players().unwrap(), 0);
    }
}
