//! HATETRIS (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so callers can write
//! `hatetris::engine::Engine` without depending on each crate separately.

pub use hate_core as core;
pub use hate_enemy as enemy;
pub use hate_engine as engine;
pub use hate_replay as replay;
pub use hate_session as session;
