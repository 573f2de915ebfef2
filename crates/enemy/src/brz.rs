//! Brzustowski's kink alternator.
//!
//! Four phases, each sending one kink and displaying another:
//!
//! | phase | send | show |
//! |-------|------|------|
//! | 0     | S    | S    |
//! | 1     | S    | Z    |
//! | 2     | Z    | Z    |
//! | 3     | Z    | S    |
//!
//! Phases 0 and 2 keep sending while the well keeps changing, logging
//! every well seen. A repeated well moves on; phases 1 and 3 last exactly
//! one piece.

use hate_core::{CoreState, PieceId, Well};
use hate_engine::Engine;
use rustc_hash::FxHashSet;

use crate::{Enemy, EnemyError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrzPhase {
    #[default]
    SendSShowS,
    SendSShowZ,
    SendZShowZ,
    SendZShowS,
}

impl BrzPhase {
    pub fn index(self) -> u8 {
        match self {
            BrzPhase::SendSShowS => 0,
            BrzPhase::SendSShowZ => 1,
            BrzPhase::SendZShowZ => 2,
            BrzPhase::SendZShowS => 3,
        }
    }

    pub fn send(self) -> PieceId {
        match self {
            BrzPhase::SendSShowS | BrzPhase::SendSShowZ => PieceId::S,
            BrzPhase::SendZShowZ | BrzPhase::SendZShowS => PieceId::Z,
        }
    }

    pub fn show(self) -> PieceId {
        match self {
            BrzPhase::SendSShowS | BrzPhase::SendZShowS => PieceId::S,
            BrzPhase::SendSShowZ | BrzPhase::SendZShowZ => PieceId::Z,
        }
    }

    fn next(self) -> Self {
        match self {
            BrzPhase::SendSShowS => BrzPhase::SendSShowZ,
            BrzPhase::SendSShowZ => BrzPhase::SendZShowZ,
            BrzPhase::SendZShowZ => BrzPhase::SendZShowS,
            BrzPhase::SendZShowS => BrzPhase::SendSShowS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrzState {
    pub phase: BrzPhase,
    pub log: FxHashSet<Well>,
}

impl BrzState {
    /// The piece on display after the most recent send.
    pub fn preview(&self) -> PieceId {
        self.phase.show()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Brzustowski;

impl Enemy for Brzustowski {
    type State = BrzState;

    fn initial_state(&self) -> BrzState {
        BrzState::default()
    }

    fn next_piece(
        &self,
        core: &CoreState,
        state: &BrzState,
        _engine: &Engine,
    ) -> Result<(PieceId, BrzState), EnemyError> {
        let mut next = state.clone();
        match state.phase {
            BrzPhase::SendSShowS | BrzPhase::SendZShowZ => {
                if next.log.contains(&core.well) {
                    next.phase = state.phase.next();
                } else {
                    next.log.insert(core.well.clone());
                }
            }
            BrzPhase::SendSShowZ | BrzPhase::SendZShowS => {
                next.phase = state.phase.next();
                next.log.clear();
            }
        }
        Ok((next.phase.send(), next))
    }
}
