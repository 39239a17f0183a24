//! Core piece logic - pure, deterministic, and testable
//!
//! This crate holds the falling-piece model. It has **no dependencies** on a
//! board, UI, or I/O, which keeps it:
//!
//! - **Deterministic**: the random source is passed in, so a fixed seed
//!   always yields the same pieces
//! - **Testable**: every operation is a plain mutation on an owned value
//! - **Portable**: any board or renderer can drive it
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shape templates and the [`Shape`] matrix
//! - [`tetromino`]: the active piece with movement and rotation
//! - [`rng`]: a seedable LCG usable anywhere a [`rand::Rng`] is expected
//!
//! # Example
//!
//! ```
//! use blockfall_core::{SimpleRng, Tetromino};
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut piece = Tetromino::spawn(&mut rng);
//! let (rows, cols) = piece.shape().dimensions();
//!
//! assert_eq!(piece.position(), (3, -(rows as i32)));
//!
//! piece.move_by(1, 2);
//! piece.rotate_cw();
//! assert_eq!(piece.shape().dimensions(), (cols, rows));
//! ```

pub mod pieces;
pub mod rng;
pub mod tetromino;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use pieces::{get_spawn_shape, template, Shape};
pub use rng::SimpleRng;
pub use tetromino::Tetromino;
