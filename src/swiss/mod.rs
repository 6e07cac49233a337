pub mod pairing;
pub mod standings;
pub mod types;

pub use pairing::compute_pairings;
pub use standings::compute_standings;
pub use types::{MatchHistory, Pairing, PlayerId, StandingEntry};
