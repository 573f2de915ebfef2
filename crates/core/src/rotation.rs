//! Geometry: piece shapes as 4x4 grids, turned into four trimmed
//! orientations per piece once per rotation system.

use crate::board::Row;
use crate::{ConfigError, Piece, PieceId, Rotation};

/// Side of the square grid every shape is drawn in.
pub const GRID_SIZE: usize = 4;

type Grid = [Row; GRID_SIZE];

/// One rotation of one shape: the occupied rows trimmed to a minimal
/// bounding box and shifted so the leftmost cell sits at bit 0.
/// `x_min`/`y_min` locate that box inside the 4x4 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Orientation {
    pub x_min: i32,
    pub y_min: i32,
    pub x_dim: i32,
    pub y_dim: i32,
    rows: [Row; GRID_SIZE],
}

impl Orientation {
    /// Trim a grid. An empty grid yields a zero-sized orientation.
    pub fn from_grid(grid: Grid) -> Self {
        let occupied = || grid.iter().enumerate().filter(|&(_, &row)| row != 0);
        let Some((y_min, _)) = occupied().next() else {
            return Self::default();
        };
        let y_max = occupied().last().map_or(y_min, |(y, _)| y);
        let x_min = occupied()
            .map(|(_, row)| row.trailing_zeros())
            .min()
            .unwrap_or(0);
        let x_max = occupied()
            .map(|(_, row)| Row::BITS - 1 - row.leading_zeros())
            .max()
            .unwrap_or(0);

        let mut rows = [0; GRID_SIZE];
        for (dst, src) in rows.iter_mut().zip(&grid[y_min..=y_max]) {
            *dst = src >> x_min;
        }

        Self {
            x_min: x_min as i32,
            y_min: y_min as i32,
            x_dim: (x_max - x_min + 1) as i32,
            y_dim: (y_max - y_min + 1) as i32,
            rows,
        }
    }

    /// Trimmed rows, top to bottom, `y_dim` of them.
    #[inline(always)]
    pub fn rows(&self) -> &[Row] {
        &self.rows[..self.y_dim as usize]
    }

    pub fn cell_count(&self) -> u32 {
        self.rows().iter().map(|row| row.count_ones()).sum()
    }
}

/// Turn a grid a quarter clockwise about its centre: `new[r][c] = old[3 - c][r]`.
fn rotate_grid(grid: Grid) -> Grid {
    let mut out = [0; GRID_SIZE];
    for (r, dst) in out.iter_mut().enumerate() {
        for c in 0..GRID_SIZE {
            if (grid[GRID_SIZE - 1 - c] >> r) & 1 == 1 {
                *dst |= 1 << c;
            }
        }
    }
    out
}

/// All four orientations of a shape, starting from the grid as drawn.
pub fn orientations(grid: Grid) -> [Orientation; 4] {
    let mut grid = grid;
    let mut out = [Orientation::default(); 4];
    for orientation in out.iter_mut() {
        *orientation = Orientation::from_grid(grid);
        grid = rotate_grid(grid);
    }
    out
}

/// Lenient grid parser: `#` is filled, anything else is empty.
const fn grid(rows: [&str; GRID_SIZE]) -> Grid {
    let mut out = [0; GRID_SIZE];
    let mut y = 0;
    while y < GRID_SIZE {
        let bytes = rows[y].as_bytes();
        let mut x = 0;
        while x < GRID_SIZE && x < bytes.len() {
            if bytes[x] == b'#' {
                out[y] |= 1 << x;
            }
            x += 1;
        }
        y += 1;
    }
    out
}

/// HATETRIS shapes in priority order: ties between equally bad pieces
/// go to the earlier one.
const HATETRIS_SHAPES: [(PieceId, Grid); 7] = [
    (PieceId::S, grid(["....", ".##.", "##..", "...."])),
    (PieceId::Z, grid(["....", "##..", ".##.", "...."])),
    (PieceId::O, grid(["....", ".##.", ".##.", "...."])),
    (PieceId::I, grid(["....", "####", "....", "...."])),
    (PieceId::L, grid(["....", "###.", "#...", "...."])),
    (PieceId::J, grid(["....", "###.", "..#.", "...."])),
    (PieceId::T, grid(["....", "###.", ".#..", "...."])),
];

#[derive(Clone, Debug, PartialEq, Eq)]
struct PieceShapes {
    id: PieceId,
    orientations: [Orientation; 4],
}

/// Piece identities, each with exactly four orientations, in priority
/// order, plus the spawn rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationSystem {
    pieces: Vec<PieceShapes>,
}

impl RotationSystem {
    pub fn hatetris() -> Self {
        Self {
            pieces: HATETRIS_SHAPES
                .iter()
                .map(|&(id, grid)| PieceShapes {
                    id,
                    orientations: orientations(grid),
                })
                .collect(),
        }
    }

    /// Build from textual 4x4 grids (`#` filled, `.` empty). The slice
    /// order is the priority order.
    pub fn from_shapes(shapes: &[(PieceId, [&str; GRID_SIZE])]) -> Result<Self, ConfigError> {
        if shapes.is_empty() {
            return Err(ConfigError::EmptyRotationSystem);
        }

        let mut pieces: Vec<PieceShapes> = Vec::with_capacity(shapes.len());
        for &(id, rows) in shapes {
            if pieces.iter().any(|p| p.id == id) {
                return Err(ConfigError::DuplicatePiece(id));
            }
            for (y, row) in rows.iter().enumerate() {
                if row.chars().count() != GRID_SIZE {
                    return Err(ConfigError::MalformedShape {
                        id,
                        reason: format!("row {y} is not {GRID_SIZE} cells wide"),
                    });
                }
                if let Some(bad) = row.chars().find(|&c| c != '#' && c != '.') {
                    return Err(ConfigError::MalformedShape {
                        id,
                        reason: format!("unexpected character {bad:?} in row {y}"),
                    });
                }
            }
            let g = grid(rows);
            if g.iter().all(|&row| row == 0) {
                return Err(ConfigError::EmptyShape(id));
            }
            pieces.push(PieceShapes {
                id,
                orientations: orientations(g),
            });
        }

        Ok(Self { pieces })
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Piece identities in priority order.
    pub fn piece_ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces.iter().map(|p| p.id)
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.iter().any(|p| p.id == id)
    }

    pub fn orientations(&self, id: PieceId) -> Option<&[Orientation; 4]> {
        self.pieces
            .iter()
            .find(|p| p.id == id)
            .map(|p| &p.orientations)
    }

    #[inline]
    pub fn orientation(&self, id: PieceId, rotation: Rotation) -> Option<&Orientation> {
        self.orientations(id).map(|o| &o[rotation.index()])
    }

    /// Spawn rule: centred 4x4 grid, top row, orientation 0.
    pub fn place_new_piece(&self, width: usize, id: PieceId) -> Option<Piece> {
        if !self.contains(id) {
            return None;
        }
        let x = (width as i32 - GRID_SIZE as i32) / 2;
        Some(Piece::new(id, x, 0, Rotation::North))
    }
}

impl Default for RotationSystem {
    fn default() -> Self {
        Self::hatetris()
    }
}
