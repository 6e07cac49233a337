use std::collections::HashMap;

use log::debug;

use super::types::{PlayerId, StandingEntry};
use crate::domain::{Match, Player};
use crate::errors::{Result, TournamentError};

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    wins: u32,
    matches: u32,
}

/// Ranks every registered player by wins, derived from the full match list.
///
/// Ties on wins are broken by player id ascending, so the same state always
/// produces the same ranking regardless of the order rows came back in.
pub fn compute_standings(players: &[Player], matches: &[Match]) -> Result<Vec<StandingEntry>> {
    debug!("Computing standings for {} players over {} matches", players.len(), matches.len());

    let mut tallies = init_tallies(players)?;
    for game in matches {
        apply_match(&mut tallies, game)?;
    }

    let mut standings = build_entries(players, &tallies);
    sort_standings(&mut standings);
    Ok(standings)
}

/// Wins descending, then player id ascending.
pub fn sort_standings(standings: &mut [StandingEntry]) {
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.player_id.cmp(&b.player_id)));
}

fn init_tallies(players: &[Player]) -> Result<HashMap<PlayerId, Tally>> {
    let mut tallies = HashMap::with_capacity(players.len());
    for player in players {
        if tallies.insert(player.id, Tally::default()).is_some() {
            return Err(TournamentError::validation(format!(
                "player id {} listed more than once",
                player.id
            )));
        }
    }
    Ok(tallies)
}

fn apply_match(tallies: &mut HashMap<PlayerId, Tally>, game: &Match) -> Result<()> {
    if game.winner_id == game.loser_id {
        return Err(TournamentError::validation(format!(
            "match {} pairs player {} against themselves",
            game.id, game.winner_id
        )));
    }
    if !tallies.contains_key(&game.loser_id) {
        return Err(TournamentError::unknown_player(game.loser_id));
    }

    let winner = tallies
        .get_mut(&game.winner_id)
        .ok_or_else(|| TournamentError::unknown_player(game.winner_id))?;
    winner.wins += 1;
    winner.matches += 1;

    if let Some(loser) = tallies.get_mut(&game.loser_id) {
        loser.matches += 1;
    }
    Ok(())
}

fn build_entries(players: &[Player], tallies: &HashMap<PlayerId, Tally>) -> Vec<StandingEntry> {
    players
        .iter()
        .map(|player| {
            let tally = tallies.get(&player.id).copied().unwrap_or_default();
            StandingEntry {
                player_id: player.id,
                name: player.name.clone(),
                wins: tally.wins,
                matches: tally.matches,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            created_at: None,
        }
    }

    fn game(id: i32, winner_id: PlayerId, loser_id: PlayerId) -> Match {
        Match {
            id,
            winner_id,
            loser_id,
            round: None,
            created_at: None,
        }
    }

    fn ids(standings: &[StandingEntry]) -> Vec<PlayerId> {
        standings.iter().map(|s| s.player_id).collect()
    }

    #[test]
    fn test_no_matches_orders_by_id() {
        let players = vec![player(3, "Carol"), player(1, "Alice"), player(2, "Bob")];

        let standings = compute_standings(&players, &[]).unwrap();

        assert_eq!(ids(&standings), vec![1, 2, 3]);
        assert!(standings.iter().all(|s| s.wins == 0 && s.matches == 0));
    }

    #[test]
    fn test_wins_and_matches_are_counted() {
        let players = vec![player(1, "Alice"), player(2, "Bob"), player(3, "Carol")];
        let matches = vec![game(1, 1, 2), game(2, 3, 1), game(3, 3, 2)];

        let standings = compute_standings(&players, &matches).unwrap();

        assert_eq!(ids(&standings), vec![3, 1, 2]);
        let carol = &standings[0];
        assert_eq!((carol.wins, carol.matches), (2, 2));
        let alice = &standings[1];
        assert_eq!((alice.wins, alice.matches), (1, 2));
        let bob = &standings[2];
        assert_eq!((bob.wins, bob.matches), (0, 2));
        assert!(standings.iter().all(|s| s.wins <= s.matches));
    }

    #[test]
    fn test_ties_broken_by_id_not_input_order() {
        let players = vec![player(4, "Dave"), player(2, "Bob"), player(3, "Carol"), player(1, "Alice")];
        let matches = vec![game(1, 3, 4), game(2, 1, 2)];

        let standings = compute_standings(&players, &matches).unwrap();

        assert_eq!(ids(&standings), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_unknown_player_in_match_is_rejected() {
        let players = vec![player(1, "Alice"), player(2, "Bob")];

        let winner_missing = compute_standings(&players, &[game(1, 9, 2)]);
        assert!(matches!(winner_missing, Err(TournamentError::Validation(_))));

        let loser_missing = compute_standings(&players, &[game(1, 1, 9)]);
        assert!(matches!(loser_missing, Err(TournamentError::Validation(_))));
    }

    #[test]
    fn test_self_match_is_rejected() {
        let players = vec![player(1, "Alice")];
        let result = compute_standings(&players, &[game(1, 1, 1)]);
        assert!(matches!(result, Err(TournamentError::Validation(_))));
    }

    #[test]
    fn test_duplicate_player_id_is_rejected() {
        let players = vec![player(1, "Alice"), player(1, "Alice again")];
        let result = compute_standings(&players, &[]);
        assert!(matches!(result, Err(TournamentError::Validation(_))));
    }
}
