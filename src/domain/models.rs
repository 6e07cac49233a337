use chrono::NaiveDateTime;

use crate::swiss::types::{MatchId, PlayerId};

/// Registered player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Recorded match outcome. Never updated after insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: MatchId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub round: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
}

/// Players and matches read together, so standings and pairings are derived
/// from one consistent view of the store.
#[derive(Debug, Clone, Default)]
pub struct TournamentSnapshot {
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
}

impl TournamentSnapshot {
    pub fn new(players: Vec<Player>, matches: Vec<Match>) -> Self {
        Self { players, matches }
    }

    /// Highest round number recorded so far, if any match carried one.
    pub fn last_round(&self) -> Option<i32> {
        self.matches.iter().filter_map(|m| m.round).max()
    }
}
