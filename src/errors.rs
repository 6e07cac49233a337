use thiserror::Error;

use crate::swiss::types::PlayerId;

pub type Result<T> = std::result::Result<T, TournamentError>;

/// Failures surfaced by tournament operations.
///
/// Validation and odd-count failures are caller mistakes and are never
/// retried. Storage failures come from the repository and are passed through
/// untouched.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl TournamentError {
    pub fn validation(message: impl Into<String>) -> Self {
        TournamentError::Validation(message.into())
    }

    pub fn unknown_player(id: PlayerId) -> Self {
        TournamentError::Validation(format!("unknown player id {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            TournamentError::unknown_player(7).to_string(),
            "validation failed: unknown player id 7"
        );
        assert_eq!(
            TournamentError::OddPlayerCount(3).to_string(),
            "cannot pair an odd number of players (3)"
        );
    }

    #[test]
    fn test_storage_error_keeps_message() {
        let err: TournamentError = anyhow::anyhow!("disk on fire").into();
        assert!(matches!(err, TournamentError::Storage(_)));
        assert_eq!(err.to_string(), "disk on fire");
    }
}
