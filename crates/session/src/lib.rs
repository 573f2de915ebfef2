//! hate-session - a game against an enemy: modes, undo/redo history,
//! replay import/export and timed playback.

mod error;
mod history;
mod mode;
mod playback;
mod session;

pub use error::SessionError;
pub use history::History;
pub use mode::{Action, Mode};
pub use playback::{PlaybackConfig, ReplayPlayer};
pub use session::Session;
