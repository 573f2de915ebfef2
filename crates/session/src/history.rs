//! Undo/redo arena: states indexed by ply, the moves between them and a
//! cursor. `states[i + 1]` is always the result of `replay[i]` applied to
//! `states[i]`.

use hate_core::{Move, WellState};

#[derive(Clone, Debug, PartialEq)]
pub struct History<S> {
    states: Vec<WellState<S>>,
    replay: Vec<Move>,
    cursor: usize,
}

impl<S> History<S> {
    pub fn new(first: WellState<S>) -> Self {
        Self {
            states: vec![first],
            replay: Vec::new(),
            cursor: 0,
        }
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &WellState<S> {
        &self.states[self.cursor]
    }

    pub fn states(&self) -> &[WellState<S>] {
        &self.states
    }

    /// Every recorded move, including any beyond the cursor.
    pub fn replay(&self) -> &[Move] {
        &self.replay
    }

    /// Moves that lead to the current state.
    pub fn played(&self) -> &[Move] {
        &self.replay[..self.cursor]
    }

    /// The move recorded after the cursor, if any.
    pub fn recorded_move(&self) -> Option<Move> {
        self.replay.get(self.cursor).copied()
    }

    /// Replace the recorded future with `moves` whose states are not
    /// computed yet. Only valid at the start of a fresh history.
    pub fn load_replay(&mut self, moves: Vec<Move>) {
        self.states.truncate(self.cursor + 1);
        self.replay.truncate(self.cursor);
        self.replay.extend(moves);
    }

    /// Step forward onto an already computed state.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.states.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Record `mv` from the cursor. Matching the recorded move keeps the
    /// recorded future beyond it; anything else cuts it off first.
    pub fn push(&mut self, mv: Move, next: WellState<S>) {
        self.states.truncate(self.cursor + 1);
        if self.recorded_move() != Some(mv) {
            self.replay.truncate(self.cursor);
            self.replay.push(mv);
        }
        self.states.push(next);
        self.cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hate_core::CoreState;

    fn frame(score: u32) -> WellState<()> {
        WellState::new(
            CoreState {
                score,
                ..CoreState::empty(4)
            },
            (),
            None,
        )
    }

    #[test]
    fn test_undo_keeps_future() {
        let mut h = History::new(frame(0));
        h.push(Move::Left, frame(1));
        h.push(Move::Down, frame(2));
        assert!(h.back());
        assert_eq!(h.current().core.score, 1);
        assert_eq!(h.replay(), &[Move::Left, Move::Down]);
        assert_eq!(h.recorded_move(), Some(Move::Down));
        assert!(h.advance());
        assert!(!h.advance());
    }

    #[test]
    fn test_new_move_truncates() {
        let mut h = History::new(frame(0));
        h.push(Move::Left, frame(1));
        h.push(Move::Down, frame(2));
        h.back();
        h.back();
        h.push(Move::Right, frame(7));
        assert_eq!(h.replay(), &[Move::Right]);
        assert_eq!(h.states().len(), 2);
        assert_eq!(h.current().core.score, 7);
    }

    #[test]
    fn test_loaded_replay_fills_in() {
        let mut h = History::new(frame(0));
        h.load_replay(vec![Move::Down, Move::Down, Move::Up]);
        assert_eq!(h.recorded_move(), Some(Move::Down));
        assert!(!h.advance());
        h.push(Move::Down, frame(0));
        assert_eq!(h.replay().len(), 3);
        assert_eq!(h.played(), &[Move::Down]);
        assert!(h.back());
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn test_back_at_start() {
        let mut h = History::new(frame(0));
        assert!(!h.back());
        assert_eq!(h.cursor(), 0);
    }
}
