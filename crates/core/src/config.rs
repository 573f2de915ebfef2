use serde::{Deserialize, Serialize};

use crate::board::Row;
use crate::ConfigError;

/// Well dimensions. `bar` is the first row (from the top) in which a
/// completed line scores; a cell locked in row `bar - 1` ends the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WellConfig {
    pub width: usize,
    pub depth: usize,
    pub bar: usize,
}

impl WellConfig {
    pub const MIN_WIDTH: usize = 4;
    pub const MAX_WIDTH: usize = Row::BITS as usize;
    pub const MIN_BAR: usize = 4;

    /// The classic 10 x 20 well with the bar four rows down.
    pub fn hatetris() -> Self {
        Self {
            width: 10,
            depth: 20,
            bar: 4,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_WIDTH..=Self::MAX_WIDTH).contains(&self.width) {
            return Err(ConfigError::WidthOutOfRange { width: self.width });
        }
        if self.bar < Self::MIN_BAR {
            return Err(ConfigError::BarTooShallow { bar: self.bar });
        }
        if self.depth < self.bar {
            return Err(ConfigError::DepthBelowBar {
                depth: self.depth,
                bar: self.bar,
            });
        }
        Ok(())
    }

    /// Bitmask of a completely filled row.
    #[inline]
    pub fn full_row(&self) -> Row {
        Row::MAX >> (Row::BITS as usize - self.width.clamp(1, Self::MAX_WIDTH))
    }
}

impl Default for WellConfig {
    fn default() -> Self {
        Self::hatetris()
    }
}
