use anyhow::Result;

use crate::domain::{Match, Player, TournamentSnapshot};
use crate::swiss::types::PlayerId;

/// Storage boundary for players and match results.
///
/// Implementations bind every value as a query parameter and report failures
/// as `anyhow` errors; the service layer turns those into storage errors
/// without inspecting them.
pub trait Repository: Send + Sync {
    fn create_player(&self, name: &str) -> Result<Player>;

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>>;

    fn count_players(&self) -> Result<usize>;

    fn get_all_players(&self) -> Result<Vec<Player>>;

    /// Appends one match. Either the whole row is stored or nothing is.
    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId, round: Option<i32>) -> Result<Match>;

    fn get_all_matches(&self) -> Result<Vec<Match>>;

    fn delete_all_matches(&self) -> Result<()>;

    /// Removes every player together with the matches that reference them.
    fn delete_all_players(&self) -> Result<()>;

    fn load_snapshot(&self) -> Result<TournamentSnapshot> {
        let players = self.get_all_players()?;
        let matches = self.get_all_matches()?;
        Ok(TournamentSnapshot::new(players, matches))
    }
}
