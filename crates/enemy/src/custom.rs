//! Type-erased selectors, so a user-supplied enemy can run where a
//! built-in one would.

use std::any::Any;
use std::fmt;

use hate_core::{CoreState, PieceId};
use hate_engine::Engine;

use crate::{Enemy, EnemyError};

/// Boxed private state of a custom selector.
pub trait CustomState: fmt::Debug + Send + Sync {
    fn clone_box(&self) -> Box<dyn CustomState>;
    fn eq_dyn(&self, other: &dyn CustomState) -> bool;
    fn as_any(&self) -> &dyn Any;
}

impl<T> CustomState for T
where
    T: Any + Clone + fmt::Debug + PartialEq + Send + Sync,
{
    fn clone_box(&self) -> Box<dyn CustomState> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn CustomState) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Clone for Box<dyn CustomState> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl PartialEq for Box<dyn CustomState> {
    fn eq(&self, other: &Self) -> bool {
        (**self).eq_dyn(&**other)
    }
}

/// Object-safe face of [`Enemy`]. Every `Enemy` whose state is
/// `Send + Sync + 'static` gets it for free.
pub trait DynEnemy: fmt::Debug + Send + Sync {
    fn erased_initial_state(&self) -> Box<dyn CustomState>;

    fn erased_next_piece(
        &self,
        core: &CoreState,
        state: &dyn CustomState,
        engine: &Engine,
    ) -> Result<(PieceId, Box<dyn CustomState>), EnemyError>;
}

impl<E> DynEnemy for E
where
    E: Enemy + fmt::Debug + Send + Sync,
    E::State: Send + Sync + 'static,
{
    fn erased_initial_state(&self) -> Box<dyn CustomState> {
        Box::new(Enemy::initial_state(self))
    }

    fn erased_next_piece(
        &self,
        core: &CoreState,
        state: &dyn CustomState,
        engine: &Engine,
    ) -> Result<(PieceId, Box<dyn CustomState>), EnemyError> {
        let state = state
            .as_any()
            .downcast_ref::<E::State>()
            .ok_or_else(|| EnemyError::Failed(format!("{self:?} was handed a foreign state")))?;
        let (id, next) = Enemy::next_piece(self, core, state, engine)?;
        Ok((id, Box::new(next)))
    }
}
