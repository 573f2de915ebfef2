use thiserror::Error;

use crate::PieceId;

/// Invalid well dimensions or rotation system. Fatal: a session cannot be
/// constructed from a configuration that fails these checks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("can't have a well with width {width}; width must be between 4 and 32")]
    WidthOutOfRange { width: usize },
    #[error("can't have a bar at {bar}; the bar must be at least 4 rows down")]
    BarTooShallow { bar: usize },
    #[error("can't have a well with depth {depth} less than the bar at {bar}")]
    DepthBelowBar { depth: usize, bar: usize },
    #[error("rotation system has no pieces")]
    EmptyRotationSystem,
    #[error("piece {0} is defined more than once")]
    DuplicatePiece(PieceId),
    #[error("piece {id} has a malformed shape: {reason}")]
    MalformedShape { id: PieceId, reason: String },
    #[error("piece {0} has no filled cells")]
    EmptyShape(PieceId),
}
