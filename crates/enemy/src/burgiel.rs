//! Burgiel's fixed alternator: S, Z, S, Z, ... whatever the player does.
//! Rows can still be cleared against it, but not fast enough to keep a
//! bounded well from filling up.

use hate_core::{CoreState, PieceId};
use hate_engine::Engine;

use crate::{Enemy, EnemyError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Burgiel;

impl Enemy for Burgiel {
    /// The piece to send next.
    type State = PieceId;

    fn initial_state(&self) -> PieceId {
        PieceId::S
    }

    fn next_piece(
        &self,
        _core: &CoreState,
        state: &PieceId,
        _engine: &Engine,
    ) -> Result<(PieceId, PieceId), EnemyError> {
        let following = if *state == PieceId::S {
            PieceId::Z
        } else {
            PieceId::S
        };
        Ok((*state, following))
    }
}
