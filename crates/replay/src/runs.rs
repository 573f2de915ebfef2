//! Run-length units: each run of one move (1 to 4 long) is a nybble,
//! two nybbles to a byte.

use hate_core::Move;

/// Longest run a single unit can hold.
pub const MAX_RUN: usize = 4;

/// Unit written after an odd unit count: one Left.
pub const PADDING_UNIT: u8 = 0;

#[inline]
fn unit(mv: Move, run: usize) -> u8 {
    (mv.id() << 2) | (run as u8 - 1)
}

pub fn to_units(moves: &[Move]) -> Vec<u8> {
    let mut units = Vec::with_capacity(moves.len());
    let mut rest = moves;
    while let Some(&first) = rest.first() {
        let run = rest
            .iter()
            .take(MAX_RUN)
            .take_while(|&&mv| mv == first)
            .count();
        units.push(unit(first, run));
        rest = &rest[run..];
    }
    units
}

pub fn from_units(units: &[u8]) -> Vec<Move> {
    let mut moves = Vec::with_capacity(units.len() * 2);
    for &u in units {
        let run = (u & 0b11) as usize + 1;
        moves.extend(std::iter::repeat(Move::from_id(u >> 2)).take(run));
    }
    moves
}

/// Two units per byte, the first in the high nybble.
pub fn pack(units: &[u8]) -> Vec<u8> {
    units
        .chunks(2)
        .map(|pair| {
            let low = pair.get(1).copied().unwrap_or(PADDING_UNIT);
            (pair[0] << 4) | (low & 0xF)
        })
        .collect()
}

pub fn unpack(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().flat_map(|&b| [b >> 4, b & 0xF]).collect()
}
