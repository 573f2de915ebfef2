//! hate-engine - well rules and reachability for the adversarial game.
//!
//! Moves, locking, line clears below the bar, game over, and the BFS that
//! lists every state a piece can lock into.

pub mod apply;
pub mod collision;
pub mod movegen;

use hate_core::{ConfigError, CoreState, Piece, PieceId, Row, RotationSystem, WellConfig};

pub use apply::Transition;
pub use collision::fits;

/// A validated rotation system bound to well dimensions. Everything the
/// rules need is derived once here and then shared read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    rotation_system: RotationSystem,
    config: WellConfig,
    full_row: Row,
}

impl Engine {
    pub fn new(rotation_system: RotationSystem, config: WellConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if rotation_system.is_empty() {
            return Err(ConfigError::EmptyRotationSystem);
        }
        Ok(Self {
            full_row: config.full_row(),
            rotation_system,
            config,
        })
    }

    /// Seven HATETRIS pieces in a 10 x 20 well, bar at row 4.
    pub fn hatetris() -> Self {
        let config = WellConfig::hatetris();
        Self {
            rotation_system: RotationSystem::hatetris(),
            full_row: config.full_row(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &WellConfig {
        &self.config
    }

    #[inline]
    pub fn rotation_system(&self) -> &RotationSystem {
        &self.rotation_system
    }

    #[inline]
    pub fn full_row(&self) -> Row {
        self.full_row
    }

    pub fn empty_core(&self) -> CoreState {
        CoreState::empty(self.config.depth)
    }

    /// Fresh piece at the spawn position. `None` for an unknown id.
    pub fn spawn(&self, id: PieceId) -> Option<Piece> {
        self.rotation_system.place_new_piece(self.config.width, id)
    }

    /// Can `piece` sit where it is on this well? Unknown ids never fit.
    #[inline]
    pub fn fits(&self, well: &hate_core::Well, piece: &Piece) -> bool {
        match self.rotation_system.orientation(piece.id, piece.rotation) {
            Some(orientation) => fits(&self.config, well, orientation, piece.x, piece.y),
            None => false,
        }
    }

    /// Any cell in the row just above the bar ends the game.
    #[inline]
    pub fn is_game_over(&self, core: &CoreState) -> bool {
        core.well.row(self.config.bar - 1) != 0
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::hatetris()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hate_core::Rotation;

    #[test]
    fn test_new_validates() {
        let bad = WellConfig {
            width: 2,
            ..WellConfig::hatetris()
        };
        assert_eq!(
            Engine::new(RotationSystem::hatetris(), bad),
            Err(ConfigError::WidthOutOfRange { width: 2 })
        );
        let ok = Engine::new(RotationSystem::hatetris(), WellConfig::hatetris())
            .expect("valid config");
        assert_eq!(ok, Engine::hatetris());
    }

    #[test]
    fn test_spawn() {
        let engine = Engine::hatetris();
        let piece = engine.spawn(PieceId::T).expect("T spawns");
        assert_eq!((piece.x, piece.y, piece.rotation), (3, 0, Rotation::North));
        assert!(engine.fits(&engine.empty_core().well, &piece));
        assert!(engine.spawn(PieceId('Q')).is_none());
    }

    #[test]
    fn test_game_over_row() {
        let engine = Engine::hatetris();
        let mut core = engine.empty_core();
        assert!(!engine.is_game_over(&core));
        core.well.set(0, 4, true);
        assert!(!engine.is_game_over(&core));
        core.well.set(9, 3, true);
        assert!(engine.is_game_over(&core));
    }
}
