use hate_core::{CoreState, PieceId};
use hate_engine::Engine;

use crate::{Enemy, EnemyError};

/// Only ever sends I pieces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lovetris;

impl Enemy for Lovetris {
    type State = ();

    fn initial_state(&self) {}

    fn next_piece(
        &self,
        _core: &CoreState,
        _state: &(),
        _engine: &Engine,
    ) -> Result<(PieceId, ()), EnemyError> {
        Ok((PieceId::I, ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_i() {
        let engine = Engine::hatetris();
        let mut core = engine.empty_core();
        core.well.rows_mut()[19] = 0b1111101111;
        for _ in 0..3 {
            assert_eq!(
                Lovetris.next_piece(&core, &(), &engine),
                Ok((PieceId::I, ()))
            );
        }
    }
}
