use log::{debug, warn};

use super::types::{MatchHistory, Pairing, StandingEntry};
use crate::config::settings::PairingSettings;
use crate::errors::{Result, TournamentError};

/// Upper bound on candidate pairs tried while looking for a rematch-free round.
const SEARCH_BUDGET: usize = 100_000;

/// Builds the next round's pairings from ranked standings.
///
/// Players are taken from the top of the ranking and offered opponents in
/// closest-rank order. A depth-first search backs out of earlier pairs when a
/// later player would be left with only rematches, and the first complete
/// round without rematches wins. When no such round exists, each player takes
/// the closest unfaced opponent and anyone left with only rematches meets the
/// adjacent player, flagged as a rematch. Nobody is ever left out.
pub fn compute_pairings(
    standings: &[StandingEntry],
    history: &MatchHistory,
    settings: &PairingSettings,
) -> Result<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let pairings = if settings.avoid_rematches {
        pair_avoiding_rematches(standings, history)
    } else {
        pair_adjacent(standings, history)
    };

    debug!("Built {} pairings for {} players", pairings.len(), standings.len());
    Ok(pairings)
}

fn pair_adjacent(standings: &[StandingEntry], history: &MatchHistory) -> Vec<Pairing> {
    standings
        .chunks_exact(2)
        .map(|pair| build_pairing(&pair[0], &pair[1], history))
        .collect()
}

fn pair_avoiding_rematches(standings: &[StandingEntry], history: &MatchHistory) -> Vec<Pairing> {
    let ranked: Vec<&StandingEntry> = standings.iter().collect();
    let mut chosen = Vec::with_capacity(standings.len() / 2);
    let mut budget = SEARCH_BUDGET;

    if search_without_rematches(&ranked, history, &mut chosen, &mut budget) {
        return chosen
            .into_iter()
            .map(|(first, second)| build_pairing(first, second, history))
            .collect();
    }

    warn!(
        "No rematch-free round for {} players ({} candidate pairs left to try), pairing closest opponents",
        standings.len(),
        budget
    );
    pair_closest_unfaced(standings, history)
}

fn search_without_rematches<'a>(
    remaining: &[&'a StandingEntry],
    history: &MatchHistory,
    chosen: &mut Vec<(&'a StandingEntry, &'a StandingEntry)>,
    budget: &mut usize,
) -> bool {
    let Some((&first, rest)) = remaining.split_first() else {
        return true;
    };

    for (idx, &candidate) in rest.iter().enumerate() {
        if history.have_played(first.player_id, candidate.player_id) {
            continue;
        }
        if *budget == 0 {
            return false;
        }
        *budget -= 1;

        let others: Vec<&StandingEntry> = rest
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, &entry)| entry)
            .collect();

        chosen.push((first, candidate));
        if search_without_rematches(&others, history, chosen, budget) {
            if idx > 0 {
                debug!(
                    "Pairing player {} with {} rather than adjacent {}",
                    first.player_id, candidate.player_id, rest[0].player_id
                );
            }
            return true;
        }
        chosen.pop();
    }

    false
}

fn pair_closest_unfaced(standings: &[StandingEntry], history: &MatchHistory) -> Vec<Pairing> {
    let mut remaining: Vec<&StandingEntry> = standings.iter().collect();
    let mut pairings = Vec::with_capacity(standings.len() / 2);

    // `remaining` always holds an even count here, so an opponent exists.
    while !remaining.is_empty() {
        let first = remaining.remove(0);
        let idx = pick_opponent(first, &remaining, history);
        let second = remaining.remove(idx);
        pairings.push(build_pairing(first, second, history));
    }

    pairings
}

fn pick_opponent(first: &StandingEntry, candidates: &[&StandingEntry], history: &MatchHistory) -> usize {
    let fresh = candidates
        .iter()
        .position(|candidate| !history.have_played(first.player_id, candidate.player_id));

    match fresh {
        Some(idx) => idx,
        None => {
            warn!(
                "Player {} has met every remaining opponent, accepting rematch with {}",
                first.player_id, candidates[0].player_id
            );
            0
        }
    }
}

fn build_pairing(first: &StandingEntry, second: &StandingEntry, history: &MatchHistory) -> Pairing {
    Pairing {
        player1_id: first.player_id,
        player1_name: first.name.clone(),
        player2_id: second.player_id,
        player2_name: second.name.clone(),
        rematch: history.have_played(first.player_id, second.player_id),
    }
}
