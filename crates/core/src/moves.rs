//! Player moves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One player input. `Up` rotates the piece a quarter turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Move {
    Left,
    Right,
    Down,
    Up,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Down, Move::Up];

    /// 2-bit identifier used by the replay codec.
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Move::Left => 0,
            Move::Right => 1,
            Move::Down => 2,
            Move::Up => 3,
        }
    }

    /// Inverse of [`Move::id`]; only the low two bits are read.
    #[inline]
    pub fn from_id(id: u8) -> Self {
        match id & 0b11 {
            0 => Move::Left,
            1 => Move::Right,
            2 => Move::Down,
            _ => Move::Up,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Move::Left => 'L',
            Move::Right => 'R',
            Move::Down => 'D',
            Move::Up => 'U',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Move::Left),
            'R' => Some(Move::Right),
            'D' => Some(Move::Down),
            'U' => Some(Move::Up),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse a compact `"LRDU"` string, skipping anything that is not a move.
pub fn parse_moves(s: &str) -> Vec<Move> {
    s.chars().filter_map(Move::from_char).collect()
}
