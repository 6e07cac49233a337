use log::{debug, info};

use crate::config::settings::PairingSettings;
use crate::database::Repository;
use crate::domain::{Match, Player};
use crate::errors::{Result, TournamentError};
use crate::swiss::{self, MatchHistory, Pairing, PlayerId, StandingEntry};

/// Tournament operations over an injected repository.
///
/// Win counts are never stored; every standings or pairings request derives
/// them again from the recorded matches.
pub struct TournamentService<R: Repository> {
    repository: R,
    pairing: PairingSettings,
}

impl<R: Repository> TournamentService<R> {
    pub fn new(repository: R, pairing: PairingSettings) -> Self {
        Self { repository, pairing }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        if name.trim().is_empty() {
            return Err(TournamentError::validation("player name must not be empty"));
        }

        let player = self.repository.create_player(name)?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn report_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match> {
        self.report_match_in_round(winner_id, loser_id, None)
    }

    pub fn report_match_in_round(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
        round: Option<i32>,
    ) -> Result<Match> {
        self.validate_match(winner_id, loser_id, round)?;

        let recorded = match self.repository.record_match(winner_id, loser_id, round) {
            Ok(recorded) => recorded,
            Err(e) => {
                // A player deleted since validation surfaces as a constraint failure.
                self.ensure_players_exist(winner_id, loser_id)?;
                return Err(e.into());
            }
        };
        info!("Recorded match {}: {} beat {}", recorded.id, winner_id, loser_id);
        Ok(recorded)
    }

    fn validate_match(&self, winner_id: PlayerId, loser_id: PlayerId, round: Option<i32>) -> Result<()> {
        if winner_id == loser_id {
            return Err(TournamentError::validation(format!(
                "player {} cannot play against themselves",
                winner_id
            )));
        }
        if let Some(round) = round.filter(|r| *r < 1) {
            return Err(TournamentError::validation(format!("round must be at least 1, got {}", round)));
        }
        self.ensure_players_exist(winner_id, loser_id)
    }

    fn ensure_players_exist(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<()> {
        for id in [winner_id, loser_id] {
            if self.repository.find_player(id)?.is_none() {
                return Err(TournamentError::unknown_player(id));
            }
        }
        Ok(())
    }

    pub fn count_players(&self) -> Result<usize> {
        Ok(self.repository.count_players()?)
    }

    pub fn reset_matches(&self) -> Result<()> {
        self.repository.delete_all_matches()?;
        info!("Cleared match history");
        Ok(())
    }

    pub fn reset_players(&self) -> Result<()> {
        self.repository.delete_all_players()?;
        info!("Cleared players and match history");
        Ok(())
    }

    pub fn standings(&self) -> Result<Vec<StandingEntry>> {
        let snapshot = self.repository.load_snapshot()?;
        swiss::compute_standings(&snapshot.players, &snapshot.matches)
    }

    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let snapshot = self.repository.load_snapshot()?;
        let standings = swiss::compute_standings(&snapshot.players, &snapshot.matches)?;
        let history = MatchHistory::from_matches(&snapshot.matches);
        if history.is_empty() {
            debug!("No matches recorded yet, pairing {} players by id", standings.len());
        } else {
            debug!("Pairing {} players with {} prior pairings", standings.len(), history.len());
        }

        swiss::compute_pairings(&standings, &history, &self.pairing)
    }
}
