//! Runtime choice between the built-in selectors.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use hate_core::{CoreState, PieceId};
use hate_engine::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    BrzState, Brzustowski, Burgiel, CustomState, DynEnemy, Enemy, EnemyError,
    LoopNaiveWorstPiece, Lovetris, VisitCounts, WorstPiece,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnemyKind {
    Hatetris,
    HatetrisNaive,
    Brz,
    Burgiel,
    Lovetris,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Hatetris,
        EnemyKind::HatetrisNaive,
        EnemyKind::Brz,
        EnemyKind::Burgiel,
        EnemyKind::Lovetris,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Hatetris => "hatetris",
            EnemyKind::HatetrisNaive => "hatetris-naive",
            EnemyKind::Brz => "brz",
            EnemyKind::Burgiel => "burgiel",
            EnemyKind::Lovetris => "lovetris",
        }
    }

    pub fn build(self) -> AnyEnemy {
        match self {
            EnemyKind::Hatetris => AnyEnemy::Hatetris(WorstPiece),
            EnemyKind::HatetrisNaive => AnyEnemy::HatetrisNaive(LoopNaiveWorstPiece),
            EnemyKind::Brz => AnyEnemy::Brz(Brzustowski),
            EnemyKind::Burgiel => AnyEnemy::Burgiel(Burgiel),
            EnemyKind::Lovetris => AnyEnemy::Lovetris(Lovetris),
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown enemy {0:?} (expected one of hatetris, hatetris-naive, brz, burgiel, lovetris)")]
pub struct ParseEnemyKindError(pub String);

impl FromStr for EnemyKind {
    type Err = ParseEnemyKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EnemyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ParseEnemyKindError(s.to_string()))
    }
}

/// One of the built-in selectors, or a user-supplied one.
#[derive(Clone, Debug)]
pub enum AnyEnemy {
    Hatetris(WorstPiece),
    HatetrisNaive(LoopNaiveWorstPiece),
    Brz(Brzustowski),
    Burgiel(Burgiel),
    Lovetris(Lovetris),
    Custom(Arc<dyn DynEnemy>),
}

/// State of whichever selector is running.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyState {
    Visits(VisitCounts),
    Stateless,
    Brz(BrzState),
    Burgiel(PieceId),
    Custom(Box<dyn CustomState>),
}

impl AnyEnemy {
    pub fn custom<E: DynEnemy + 'static>(enemy: E) -> Self {
        AnyEnemy::Custom(Arc::new(enemy))
    }

    /// `None` for a custom selector.
    pub fn kind(&self) -> Option<EnemyKind> {
        match self {
            AnyEnemy::Hatetris(_) => Some(EnemyKind::Hatetris),
            AnyEnemy::HatetrisNaive(_) => Some(EnemyKind::HatetrisNaive),
            AnyEnemy::Brz(_) => Some(EnemyKind::Brz),
            AnyEnemy::Burgiel(_) => Some(EnemyKind::Burgiel),
            AnyEnemy::Lovetris(_) => Some(EnemyKind::Lovetris),
            AnyEnemy::Custom(_) => None,
        }
    }
}

impl PartialEq for AnyEnemy {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyEnemy::Custom(a), AnyEnemy::Custom(b)) => Arc::ptr_eq(a, b),
            (a, b) => a.kind().is_some() && a.kind() == b.kind(),
        }
    }
}

impl fmt::Display for AnyEnemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{kind}"),
            None => f.write_str("custom"),
        }
    }
}

impl Default for AnyEnemy {
    fn default() -> Self {
        AnyEnemy::Hatetris(WorstPiece)
    }
}

impl From<EnemyKind> for AnyEnemy {
    fn from(kind: EnemyKind) -> Self {
        kind.build()
    }
}

impl Enemy for AnyEnemy {
    type State = AnyState;

    fn initial_state(&self) -> AnyState {
        match self {
            AnyEnemy::Hatetris(e) => AnyState::Visits(e.initial_state()),
            AnyEnemy::HatetrisNaive(_) | AnyEnemy::Lovetris(_) => AnyState::Stateless,
            AnyEnemy::Brz(e) => AnyState::Brz(e.initial_state()),
            AnyEnemy::Burgiel(e) => AnyState::Burgiel(e.initial_state()),
            AnyEnemy::Custom(e) => AnyState::Custom(e.erased_initial_state()),
        }
    }

    fn next_piece(
        &self,
        core: &CoreState,
        state: &AnyState,
        engine: &Engine,
    ) -> Result<(PieceId, AnyState), EnemyError> {
        match (self, state) {
            (AnyEnemy::Hatetris(e), AnyState::Visits(s)) => e
                .next_piece(core, s, engine)
                .map(|(id, s)| (id, AnyState::Visits(s))),
            (AnyEnemy::HatetrisNaive(e), AnyState::Stateless) => e
                .next_piece(core, &(), engine)
                .map(|(id, ())| (id, AnyState::Stateless)),
            (AnyEnemy::Brz(e), AnyState::Brz(s)) => e
                .next_piece(core, s, engine)
                .map(|(id, s)| (id, AnyState::Brz(s))),
            (AnyEnemy::Burgiel(e), AnyState::Burgiel(s)) => e
                .next_piece(core, s, engine)
                .map(|(id, s)| (id, AnyState::Burgiel(s))),
            (AnyEnemy::Lovetris(e), AnyState::Stateless) => e
                .next_piece(core, &(), engine)
                .map(|(id, ())| (id, AnyState::Stateless)),
            (AnyEnemy::Custom(e), AnyState::Custom(s)) => e
                .erased_next_piece(core, &**s, engine)
                .map(|(id, s)| (id, AnyState::Custom(s))),
            (enemy, _) => Err(EnemyError::Failed(format!(
                "{enemy} was handed another enemy's state"
            ))),
        }
    }
}
