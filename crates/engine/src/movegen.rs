//! Reachability: every core state a piece can lock into from its spawn.

use std::collections::VecDeque;

use hate_core::{CoreState, Move, Piece, PieceId, GRID_SIZE};

use crate::{Engine, Transition};

impl Engine {
    /// BFS over Left, Right, Down and Up from the spawn position. Each
    /// blocked Down contributes the locked result; two positions locking
    /// into the same well both appear. Empty when the spawn position is
    /// already blocked or the id is unknown.
    pub fn next_core_states(&self, core: &CoreState, id: PieceId) -> Vec<CoreState> {
        let mut outcomes = Vec::new();
        let Some(spawn) = self.spawn(id) else {
            return outcomes;
        };
        if !self.fits(&core.well, &spawn) {
            return outcomes;
        }

        let start = self.fast_forward(core, spawn);
        let mut visited = vec![false; self.position_count()];
        let mut queue = VecDeque::new();
        self.visit_state(&mut visited, &mut queue, start);

        while let Some(piece) = queue.pop_front() {
            for mv in Move::ALL {
                match self.step(core, piece, mv) {
                    Transition::Moved(next) => self.visit_state(&mut visited, &mut queue, next),
                    Transition::Locked(locked) => outcomes.push(locked),
                    Transition::Rejected => {}
                }
            }
        }

        log::trace!("{id}: {} outcomes from y = {}", outcomes.len(), start.y);
        outcomes
    }

    /// Drop the piece through empty rows while its whole 4x4 grid stays
    /// in empty space. Every position skipped this way is reachable from
    /// the one it ends at, so nothing is lost.
    fn fast_forward(&self, core: &CoreState, mut piece: Piece) -> Piece {
        let grid = GRID_SIZE as i32;
        let depth = self.config().depth as i32;
        let box_rows_empty =
            (piece.y..piece.y + grid).all(|y| y >= depth || core.well.row(y as usize) == 0);
        if !box_rows_empty {
            return piece;
        }
        while piece.y + grid < depth && core.well.row((piece.y + grid) as usize) == 0 {
            piece.y += 1;
        }
        piece
    }

    fn position_count(&self) -> usize {
        let cfg = self.config();
        (cfg.width + 3) * (cfg.depth + 3) * 4
    }

    fn visit_state(&self, visited: &mut [bool], queue: &mut VecDeque<Piece>, piece: Piece) {
        let cfg = self.config();
        let (Ok(xi), Ok(yi)) = (usize::try_from(piece.x + 3), usize::try_from(piece.y)) else {
            return;
        };
        let index = (xi * (cfg.depth + 3) + yi) * 4 + piece.rotation.index();
        if let Some(seen) = visited.get_mut(index) {
            if !*seen {
                *seen = true;
                queue.push_back(piece);
            }
        }
    }
}
