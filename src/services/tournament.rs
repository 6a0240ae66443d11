use crate::config::settings::PairingSettings;
use crate::database::{Match, Player, TournamentRepository};
use crate::errors::TournamentResult;
use crate::swiss::{self, MatchId, NewMatch, PlayerId, RoundPairings, StandingRow};

/// Entry point for every tournament operation, over an injected repository
pub struct TournamentService<R> {
    repo: R,
    pairing: PairingSettings,
}

impl<R: TournamentRepository> TournamentService<R> {
    pub fn new(repo: R, pairing: PairingSettings) -> Self {
        Self { repo, pairing }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn pairing_settings(&self) -> &PairingSettings {
        &self.pairing
    }

    pub fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        swiss::register_player(&self.repo, name)
    }

    pub fn report_match(&self, new_match: &NewMatch) -> TournamentResult<MatchId> {
        swiss::report_match(&self.repo, new_match)
    }

    pub fn standings(&self) -> TournamentResult<Vec<StandingRow>> {
        swiss::compute_standings(&self.repo)
    }

    pub fn pairings(&self) -> TournamentResult<RoundPairings> {
        swiss::compute_pairings(&self.repo, &self.pairing)
    }

    /// Pairs with settings other than the configured ones
    pub fn pairings_with(&self, settings: &PairingSettings) -> TournamentResult<RoundPairings> {
        swiss::compute_pairings(&self.repo, settings)
    }

    pub fn count_players(&self) -> TournamentResult<i64> {
        self.repo.count_players()
    }

    pub fn players(&self) -> TournamentResult<Vec<Player>> {
        self.repo.list_players()
    }

    pub fn matches(&self) -> TournamentResult<Vec<Match>> {
        self.repo.list_matches()
    }

    pub fn delete_matches(&self) -> TournamentResult<()> {
        self.repo.delete_all_matches()
    }

    pub fn delete_players(&self) -> TournamentResult<()> {
        self.repo.delete_all_players()
    }

    pub fn reset(&self) -> TournamentResult<()> {
        self.repo.reset()
    }
}
