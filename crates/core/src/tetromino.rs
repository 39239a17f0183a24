//! Tetromino module - the active falling piece
//!
//! A [`Tetromino`] owns its shape matrix, a fixed palette color and the board
//! position of the matrix's top-left cell. It performs no collision checks:
//! whoever owns the board decides whether a move or rotation is legal and
//! undoes it if not.

use rand::Rng;

use crate::pieces::{get_spawn_shape, Shape};
use crate::types::{PieceKind, Rgb, SPAWN_X};

/// One falling piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tetromino {
    kind: PieceKind,
    shape: Shape,
    color: Rgb,
    x: i32,
    y: i32,
}

impl Tetromino {
    /// Spawn a piece of the given kind above the visible board.
    ///
    /// The piece starts at `x = SPAWN_X` and `y = -rows`, so no filled cell is
    /// on the board yet.
    pub fn new(kind: PieceKind) -> Self {
        let shape = get_spawn_shape(kind);
        let y = -(shape.rows() as i32);
        Self {
            kind,
            shape,
            color: kind.color(),
            x: SPAWN_X,
            y,
        }
    }

    /// Spawn a piece whose kind is drawn uniformly from `rng`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index = rng.gen_range(0..PieceKind::COUNT);
        Self::new(PieceKind::ALL[index])
    }

    /// Spawn a piece using the thread-local RNG.
    pub fn random() -> Self {
        Self::spawn(&mut rand::thread_rng())
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Shape index in `0..7`, also the palette index.
    pub fn shape_index(&self) -> usize {
        self.kind.index()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Translate by `(dx, dy)`. No bounds checking.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate the matrix a quarter turn.
    ///
    /// The matrix is transposed, then for `direction > 0` every row is
    /// reversed, otherwise the row order is reversed. The anchor `(x, y)` is
    /// left as is and no kicks are attempted.
    pub fn rotate(&mut self, direction: i32) {
        let mut rotated = self.shape.transposed();
        if direction > 0 {
            rotated.reverse_each_row();
        } else {
            rotated.reverse_rows();
        }
        self.shape = rotated;
    }

    pub fn rotate_cw(&mut self) {
        self.rotate(1);
    }

    pub fn rotate_ccw(&mut self) {
        self.rotate(-1);
    }

    /// Absolute `(x, y)` board coordinates of every filled cell.
    ///
    /// Cells above the board have negative `y`.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled()
            .map(move |(col, row)| (self.x + col as i32, self.y + row as i32))
    }
}
