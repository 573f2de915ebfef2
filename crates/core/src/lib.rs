//! hate-core - fundamental types for the adversarial well: pieces,
//! moves, the bit-packed well, geometry and configuration.

mod board;
mod config;
mod error;
mod moves;
mod piece;
pub mod rotation;
mod state;

pub use board::{CoreState, Row, Well};
pub use config::WellConfig;
pub use error::ConfigError;
pub use moves::{parse_moves, Move};
pub use piece::{Piece, PieceId, Rotation};
pub use rotation::{Orientation, RotationSystem, GRID_SIZE};
pub use state::WellState;
