//! Well representation - one `u32` bitmask per row.
//! Row 0 is the top of the well; bit `x` of a row is column `x`.

use std::fmt;

use serde::{Deserialize, Serialize};

pub type Row = u32;

/// The board. Equality and hashing are structural over the row values,
/// so a `Well` is directly usable as a map key.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Well {
    rows: Vec<Row>,
}

impl Well {
    pub fn new(depth: usize) -> Self {
        Self {
            rows: vec![0; depth],
        }
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Raw row bits; rows outside the well read as empty.
    #[inline(always)]
    pub fn row(&self, y: usize) -> Row {
        self.rows.get(y).copied().unwrap_or(0)
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        (self.row(y) >> x) & 1 == 1
    }

    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        if let Some(row) = self.rows.get_mut(y) {
            if filled {
                *row |= 1 << x;
            } else {
                *row &= !(1 << x);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Index of the topmost occupied row, or the depth for an empty well.
    /// Larger is better for the player.
    pub fn highest_peak(&self) -> usize {
        self.rows
            .iter()
            .position(|&row| row != 0)
            .unwrap_or(self.rows.len())
    }

    /// Remove row `y`, shift everything above it down by one and open a
    /// blank row at the top.
    pub fn collapse_row(&mut self, y: usize) {
        if y >= self.rows.len() {
            return;
        }
        self.rows.remove(y);
        self.rows.insert(0, 0);
    }

    /// Text picture of the well, `#` for filled cells. Rows above `bar`
    /// are drawn with `:` for empty cells.
    pub fn render(&self, width: usize, bar: usize) -> String {
        let mut out = String::with_capacity((width + 1) * self.rows.len());
        for (y, &row) in self.rows.iter().enumerate() {
            let empty = if y < bar { ':' } else { '.' };
            for x in 0..width {
                out.push(if (row >> x) & 1 == 1 { '#' } else { empty });
            }
            out.push('\n');
        }
        out
    }
}

/// Board plus score. Score never decreases within a session.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct CoreState {
    pub well: Well,
    pub score: u32,
}

impl CoreState {
    pub fn empty(depth: usize) -> Self {
        Self {
            well: Well::new(depth),
            score: 0,
        }
    }
}

impl fmt::Display for CoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .well
            .rows()
            .iter()
            .map(|&row| (Row::BITS - row.leading_zeros()) as usize)
            .max()
            .unwrap_or(0);
        write!(f, "{}", self.well.render(width, 0))?;
        writeln!(f, "score {}", self.score)
    }
}
