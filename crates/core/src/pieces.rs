//! Pieces module - Tetromino shape templates and the occupancy matrix
//!
//! Every piece is described by a small rectangular matrix of filled/empty
//! cells. The seven templates are `'static` data; a [`Shape`] is an owned copy
//! that a live piece can rotate without touching the template or any other
//! piece.

use std::fmt;

use crate::types::PieceKind;

/// Row-major template rows, `1` = filled
pub type Template = &'static [&'static [u8]];

const I_TEMPLATE: Template = &[&[1, 1, 1, 1]];

const O_TEMPLATE: Template = &[&[1, 1], &[1, 1]];

const T_TEMPLATE: Template = &[&[1, 1, 1], &[0, 1, 0]];

const L_TEMPLATE: Template = &[&[1, 1, 1], &[1, 0, 0]];

const J_TEMPLATE: Template = &[&[1, 1, 1], &[0, 0, 1]];

const S_TEMPLATE: Template = &[&[1, 1, 0], &[0, 1, 1]];

const Z_TEMPLATE: Template = &[&[0, 1, 1], &[1, 1, 0]];

/// Get the spawn template for a piece kind
pub fn template(kind: PieceKind) -> Template {
    match kind {
        PieceKind::I => I_TEMPLATE,
        PieceKind::O => O_TEMPLATE,
        PieceKind::T => T_TEMPLATE,
        PieceKind::L => L_TEMPLATE,
        PieceKind::J => J_TEMPLATE,
        PieceKind::S => S_TEMPLATE,
        PieceKind::Z => Z_TEMPLATE,
    }
}

/// Get a fresh, independently owned spawn shape for a piece kind
pub fn get_spawn_shape(kind: PieceKind) -> Shape {
    Shape::from_template(template(kind))
}

/// Rectangular occupancy matrix of a piece.
///
/// Always at least 1x1; every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: Vec<Vec<bool>>,
}

impl Shape {
    /// Deep-copy a template, row by row.
    pub fn from_template(template: Template) -> Self {
        let cells = template
            .iter()
            .map(|row| row.iter().map(|&c| c != 0).collect())
            .collect();
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Out-of-range coordinates read as empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn as_rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Matrix as `0`/`1` rows, the same encoding as the templates.
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect()
    }

    /// `(col, row)` offsets of filled cells, row-major order
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(col, _)| (col, row))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }

    /// New matrix with `out[i][j] == self[j][i]`; R x C becomes C x R.
    pub fn transposed(&self) -> Self {
        let cells = (0..self.cols())
            .map(|col| self.cells.iter().map(|row| row[col]).collect())
            .collect();
        Self { cells }
    }

    /// Reverse the cell order inside every row (horizontal mirror).
    pub fn reverse_each_row(&mut self) {
        for row in &mut self.cells {
            row.reverse();
        }
    }

    /// Reverse the order of the rows (vertical mirror).
    pub fn reverse_rows(&mut self) {
        self.cells.reverse();
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(if cell { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}
