use serde::{Deserialize, Serialize};

use crate::domain::{Match, Player};
use crate::swiss::{Pairing, PlayerId, StandingEntry};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMatchRequest {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub round: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub player_id: PlayerId,
    pub name: String,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub match_id: i32,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub round: Option<i32>,
}

impl From<Match> for MatchResponse {
    fn from(recorded: Match) -> Self {
        Self {
            match_id: recorded.id,
            winner_id: recorded.winner_id,
            loser_id: recorded.loser_id,
            round: recorded.round,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCountResponse {
    pub count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingItem {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub items: Vec<StandingItem>,
    pub total: usize,
}

impl From<Vec<StandingEntry>> for StandingsResponse {
    fn from(standings: Vec<StandingEntry>) -> Self {
        let total = standings.len();
        let items = standings
            .into_iter()
            .enumerate()
            .map(|(i, entry)| StandingItem {
                rank: i + 1,
                player_id: entry.player_id,
                name: entry.name,
                wins: entry.wins,
                matches: entry.matches,
            })
            .collect();
        Self { items, total }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingItem {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
    pub rematch: bool,
}

impl From<Pairing> for PairingItem {
    fn from(pairing: Pairing) -> Self {
        Self {
            player1_id: pairing.player1_id,
            player1_name: pairing.player1_name,
            player2_id: pairing.player2_id,
            player2_name: pairing.player2_name,
            rematch: pairing.rematch,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingsResponse {
    pub items: Vec<PairingItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}
