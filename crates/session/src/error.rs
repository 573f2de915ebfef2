use hate_enemy::EnemyError;
use hate_replay::ReplayError;
use thiserror::Error;

/// Recoverable failures. The session keeps the error until the caller
/// dismisses it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("could not build enemy: {0}")]
    EnemyInstantiation(String),
    #[error("enemy failed on the first piece: {0}")]
    FirstPiece(#[source] EnemyError),
    #[error("enemy failed on a later piece: {0}")]
    NextPiece(#[source] EnemyError),
    #[error("bad replay: {0}")]
    Replay(#[from] ReplayError),
}

impl SessionError {
    /// What went wrong, in words for the player.
    pub fn interpretation(&self) -> &'static str {
        match self {
            SessionError::EnemyInstantiation(_) => {
                "The custom enemy could not be created, so no game was started."
            }
            SessionError::FirstPiece(_) => {
                "The enemy failed while choosing the first piece. The game was abandoned."
            }
            SessionError::NextPiece(_) => {
                "The enemy failed while choosing a piece. The game is halted; the board is kept as it was."
            }
            SessionError::Replay(_) => "The replay could not be read.",
        }
    }
}
