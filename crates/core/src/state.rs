//! Game state representation.

use serde::{Deserialize, Serialize};

use crate::{CoreState, Piece};

/// One frame of a session: board and score, the enemy's private state,
/// and the live piece (`None` between a lock and the next piece).
///
/// `ai_state` belongs to whichever enemy produced it and is carried
/// through history untouched.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct WellState<S> {
    pub core: CoreState,
    pub ai_state: S,
    pub piece: Option<Piece>,
}

impl<S> WellState<S> {
    pub fn new(core: CoreState, ai_state: S, piece: Option<Piece>) -> Self {
        Self {
            core,
            ai_state,
            piece,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PieceId, Rotation};

    #[test]
    fn test_clone_equality() {
        let s1 = WellState::new(
            CoreState::empty(20),
            7u32,
            Some(Piece::new(PieceId::S, 3, 0, Rotation::North)),
        );
        let s2 = s1.clone();
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_ai_state_survives_serde() {
        let s = WellState::new(CoreState::empty(4), vec![1u8, 2, 3], None);
        let json = serde_json::to_string(&s).expect("serialize");
        let back: WellState<Vec<u8>> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, s);
    }
}
