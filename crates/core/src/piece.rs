//! Piece identities, orientations and the live falling piece.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a piece shape within a rotation system.
///
/// Rotation systems are open-ended, so this is a plain character rather
/// than a closed enum. The HATETRIS shapes get named constants.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub struct PieceId(pub char);

impl PieceId {
    pub const I: PieceId = PieceId('I');
    pub const J: PieceId = PieceId('J');
    pub const L: PieceId = PieceId('L');
    pub const O: PieceId = PieceId('O');
    pub const S: PieceId = PieceId('S');
    pub const T: PieceId = PieceId('T');
    pub const Z: PieceId = PieceId('Z');
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Orientation index `o` in 0..4.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// The live, falling piece. `x`/`y` locate the top-left corner of the
/// piece's 4x4 grid; the orientation's offsets locate the actual cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
}

impl Piece {
    pub fn new(id: PieceId, x: i32, y: i32, rotation: Rotation) -> Self {
        Self { id, x, y, rotation }
    }

    pub fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn rotated(self) -> Self {
        Self {
            rotation: self.rotation.cw(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cw() {
        assert_eq!(Rotation::North.cw(), Rotation::East);
        assert_eq!(Rotation::East.cw(), Rotation::South);
        assert_eq!(Rotation::South.cw(), Rotation::West);
        assert_eq!(Rotation::West.cw(), Rotation::North);
    }

    #[test]
    fn test_rotation_index_matches_all() {
        for (i, rot) in Rotation::ALL.iter().enumerate() {
            assert_eq!(rot.index(), i);
        }
    }

    #[test]
    fn test_piece_transforms_leave_identity() {
        let p = Piece::new(PieceId::T, 3, 0, Rotation::North);
        assert_eq!(p.shifted(-1, 0).x, 2);
        assert_eq!(p.shifted(0, 1).y, 1);
        assert_eq!(p.rotated().rotation, Rotation::East);
        assert_eq!(p.rotated().id, PieceId::T);
    }

    #[test]
    fn test_piece_id_display() {
        assert_eq!(PieceId::S.to_string(), "S");
    }
}
