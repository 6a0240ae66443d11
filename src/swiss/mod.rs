pub mod pairing;
pub mod recording;
pub mod standings;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use pairing::{compute_pairings, pair_standings, MatchHistory};
pub use recording::{register_player, report_match};
pub use standings::compute_standings;
pub use types::{
    MatchId, NewMatch, OddPolicy, Pairing, PlayerId, RoundPairings, Seat, StandingRow, Unpaired,
    UnpairedOutcome,
};
