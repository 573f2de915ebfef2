//! Single moves: shift, drop, rotate, and the lock that ends a piece.

use hate_core::{CoreState, Move, Piece, WellState};

use crate::Engine;

/// What one move did to the live piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The transformed piece fits.
    Moved(Piece),
    /// Left, Right or Up into something solid. Nothing changes.
    Rejected,
    /// Down into something solid: the piece became part of the well.
    Locked(CoreState),
}

impl Engine {
    /// Try `mv` on `piece`. Only a blocked Down locks.
    pub fn step(&self, core: &CoreState, piece: Piece, mv: Move) -> Transition {
        let candidate = match mv {
            Move::Left => piece.shifted(-1, 0),
            Move::Right => piece.shifted(1, 0),
            Move::Down => piece.shifted(0, 1),
            Move::Up => piece.rotated(),
        };

        if self.fits(&core.well, &candidate) {
            Transition::Moved(candidate)
        } else if mv == Move::Down {
            Transition::Locked(self.lock(core, &piece))
        } else {
            Transition::Rejected
        }
    }

    /// Merge `piece` into the well, then collapse full rows inside its
    /// bounding box that lie at or below the bar. One point per row.
    pub fn lock(&self, core: &CoreState, piece: &Piece) -> CoreState {
        let Some(orientation) = self.rotation_system().orientation(piece.id, piece.rotation)
        else {
            return core.clone();
        };
        let (Ok(x_actual), Ok(y_actual)) = (
            u32::try_from(piece.x + orientation.x_min),
            usize::try_from(piece.y + orientation.y_min),
        ) else {
            return core.clone();
        };

        let mut well = core.well.clone();
        let mut score = core.score;

        for (r, &bits) in orientation.rows().iter().enumerate() {
            if let Some(row) = well.rows_mut().get_mut(y_actual + r) {
                *row |= bits << x_actual;
            }
        }

        // Ascending order: collapsing row y only shifts rows above it.
        for y in y_actual..y_actual + orientation.y_dim as usize {
            if y >= self.config().bar && well.row(y) == self.full_row() {
                well.collapse_row(y);
                score += 1;
            }
        }

        CoreState { well, score }
    }

    /// Advance a whole frame. A locked piece leaves `piece` empty; a
    /// frame with no live piece is returned unchanged.
    pub fn apply<S: Clone>(&self, state: &WellState<S>, mv: Move) -> WellState<S> {
        let Some(piece) = state.piece else {
            return state.clone();
        };

        match self.step(&state.core, piece, mv) {
            Transition::Moved(next) => WellState {
                piece: Some(next),
                ..state.clone()
            },
            Transition::Rejected => state.clone(),
            Transition::Locked(core) => WellState {
                core,
                ai_state: state.ai_state.clone(),
                piece: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hate_core::{PieceId, Rotation, Well};

    fn floor_ready(engine: &Engine) -> CoreState {
        // bottom row full except columns 3..=6, where a flat I fits
        let mut core = engine.empty_core();
        let depth = engine.config().depth;
        core.well.rows_mut()[depth - 1] = engine.full_row() & !(0b1111 << 3);
        core
    }

    #[test]
    fn test_left_right_and_rejection() {
        let engine = Engine::hatetris();
        let core = engine.empty_core();
        let piece = engine.spawn(PieceId::T).expect("T");

        assert_eq!(
            engine.step(&core, piece, Move::Left),
            Transition::Moved(piece.shifted(-1, 0))
        );

        let at_wall = Piece::new(PieceId::T, 0, 0, Rotation::North);
        assert_eq!(engine.step(&core, at_wall, Move::Left), Transition::Rejected);
    }

    #[test]
    fn test_rotation_is_unkicked() {
        let engine = Engine::hatetris();
        let core = engine.empty_core();
        // I North at x = 6 spans columns 6..=9; vertical I at column 8 fits
        let i = Piece::new(PieceId::I, 6, 0, Rotation::North);
        assert_eq!(
            engine.step(&core, i, Move::Up),
            Transition::Moved(i.rotated())
        );
        // vertical I at x = 7 sits in column 9; rotating back needs columns 7..=10
        let vertical = Piece::new(PieceId::I, 7, 0, Rotation::East);
        assert_eq!(engine.step(&core, vertical, Move::Up), Transition::Rejected);
    }

    #[test]
    fn test_blocked_down_locks_in_place() {
        let engine = Engine::hatetris();
        let core = engine.empty_core();
        // O occupies grid rows 1..=2, so y = 17 rests on the floor
        let o = Piece::new(PieceId::O, 3, 17, Rotation::North);
        let Transition::Locked(next) = engine.step(&core, o, Move::Down) else {
            panic!("expected a lock");
        };
        assert_eq!(next.score, 0);
        assert_eq!(next.well.row(18), 0b11 << 4);
        assert_eq!(next.well.row(19), 0b11 << 4);
    }

    #[test]
    fn test_line_clear_scores() {
        let engine = Engine::hatetris();
        let core = floor_ready(&engine);
        // flat I cells are grid row 1, so y = 18 lands on row 19
        let i = Piece::new(PieceId::I, 3, 18, Rotation::North);
        let next = engine.lock(&core, &i);
        assert_eq!(next.score, 1);
        assert_eq!(next.well, Well::new(engine.config().depth));
    }

    #[test]
    fn test_full_row_above_bar_does_not_clear() {
        let engine = Engine::hatetris();
        let mut core = engine.empty_core();
        let rows = core.well.rows_mut();
        // a stack up to the bar, every row holed in column 0
        for row in rows.iter_mut().skip(4) {
            *row = engine.full_row() & !1;
        }
        rows[3] = engine.full_row() & !(0b1111 << 3);
        // the I's blocks sit on row 3, just above the bar
        let i = Piece::new(PieceId::I, 3, 2, Rotation::North);
        let next = engine.lock(&core, &i);
        assert_eq!(next.score, 0);
        assert_eq!(next.well.row(3), engine.full_row());
        assert_eq!(next.well.row(4), engine.full_row() & !1);
        assert!(engine.is_game_over(&next));
    }

    #[test]
    fn test_apply_clears_piece_on_lock() {
        let engine = Engine::hatetris();
        let piece = Piece::new(PieceId::O, 3, 17, Rotation::North);
        let state = WellState::new(engine.empty_core(), (), Some(piece));
        let next = engine.apply(&state, Move::Down);
        assert_eq!(next.piece, None);
        assert_eq!(engine.apply(&next, Move::Left), next);
    }
}
