use std::collections::HashSet;

use crate::domain::Match;

pub type PlayerId = i32;
pub type MatchId = i32;

/// One row of the ranking, derived from match history on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl StandingEntry {
    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }
}

/// A pairing for the next round. `player1` is always the higher ranked side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
    /// The two players have met before and no other opponent was available.
    pub rematch: bool,
}

impl Pairing {
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.player1_id, self.player2_id)
    }

    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }
}

/// Unordered set of player pairs that already played each other.
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    played: HashSet<(PlayerId, PlayerId)>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: &[Match]) -> Self {
        let mut history = Self::new();
        for game in matches {
            history.record(game.winner_id, game.loser_id);
        }
        history
    }

    pub fn record(&mut self, a: PlayerId, b: PlayerId) {
        self.played.insert(Self::key(a, b));
    }

    pub fn have_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.played.contains(&Self::key(a, b))
    }

    pub fn len(&self) -> usize {
        self.played.len()
    }

    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }

    fn key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}
