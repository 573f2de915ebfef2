//! hate-enemy - adversarial piece selectors.
//!
//! An [`Enemy`] looks at the locked well and picks the next piece, threading
//! its own private state through the session history. Built-in selectors:
//! the loop-avoiding worst-piece search, its loop-naive variant, the
//! Brzustowski and Burgiel kink alternators and the benign Lovetris.
//! [`AnyEnemy`] picks one at runtime or wraps a user-supplied selector.

mod brz;
mod builtin;
mod burgiel;
mod custom;
mod lovetris;
mod worst_piece;

use std::fmt;

use hate_core::{CoreState, PieceId};
use hate_engine::Engine;
use thiserror::Error;

pub use brz::{BrzPhase, BrzState, Brzustowski};
pub use builtin::{AnyEnemy, AnyState, EnemyKind, ParseEnemyKindError};
pub use burgiel::Burgiel;
pub use custom::{CustomState, DynEnemy};
pub use lovetris::Lovetris;
pub use worst_piece::{LoopNaiveWorstPiece, VisitCounts, WorstPiece};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EnemyError {
    #[error("enemy chose piece {0:?}, which is not in the rotation system")]
    UnknownPiece(PieceId),
    #[error("{0}")]
    Failed(String),
}

/// A piece selector. Called once per piece with the state it returned
/// last time (or [`Enemy::initial_state`] for the first piece).
pub trait Enemy {
    type State: Clone + fmt::Debug + PartialEq;

    fn initial_state(&self) -> Self::State;

    fn next_piece(
        &self,
        core: &CoreState,
        state: &Self::State,
        engine: &Engine,
    ) -> Result<(PieceId, Self::State), EnemyError>;
}

/// Ask `enemy` for a piece and refuse identities the rotation system
/// does not know.
pub fn select_piece<E: Enemy + ?Sized>(
    enemy: &E,
    core: &CoreState,
    state: &E::State,
    engine: &Engine,
) -> Result<(PieceId, E::State), EnemyError> {
    let (id, next) = enemy.next_piece(core, state, engine)?;
    if !engine.rotation_system().contains(id) {
        return Err(EnemyError::UnknownPiece(id));
    }
    log::debug!("enemy sends {id}");
    Ok((id, next))
}
