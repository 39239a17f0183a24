//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the piece model and the
//! high-score store. All types are pure data with no external dependencies, so
//! they can be consumed by any board, renderer or game loop built on top.
//!
//! # Spawn Geometry
//!
//! - **Spawn column**: every piece starts with its matrix's left edge at `x = 3`
//! - **Spawn row**: `y = -(rows of the shape)`, so the piece starts fully above
//!   the visible board
//!
//! # Palette
//!
//! | Index | Piece | RGB |
//! |-------|-------|-----|
//! | 0 | I | (255, 87, 87) |
//! | 1 | O | (52, 191, 163) |
//! | 2 | T | (87, 95, 207) |
//! | 3 | L | (255, 190, 92) |
//! | 4 | J | (139, 87, 207) |
//! | 5 | S | (95, 207, 87) |
//! | 6 | Z | (255, 150, 102) |
//!
//! [`BLACK`], [`WHITE`] and [`GRAY`] are exposed for renderers; nothing in
//! this workspace draws with them.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, PIECE_COLORS, SPAWN_X};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Palette lookup by shape index
//! assert_eq!(parsed.index(), 2);
//! assert_eq!(parsed.color(), PIECE_COLORS[2]);
//!
//! assert_eq!(SPAWN_X, 3);
//! ```

use std::fmt;

/// Column of the shape matrix's top-left cell when a piece spawns
pub const SPAWN_X: i32 = 3;

/// Number of entries kept in the high-score table
pub const MAX_HIGH_SCORES: usize = 5;

/// File name of the high-score store when no path is configured
pub const DEFAULT_HIGHSCORES_FILE: &str = "highscores.json";

/// Environment variable overriding the high-score store path
pub const HIGHSCORES_PATH_ENV: &str = "BLOCKFALL_HIGHSCORES";

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Background color
pub const BLACK: Rgb = Rgb::new(17, 17, 17);

/// Foreground / text color
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Grid and panel color
pub const GRAY: Rgb = Rgb::new(40, 40, 40);

/// Piece colors, indexed by [`PieceKind::index`]
pub const PIECE_COLORS: [Rgb; 7] = [
    Rgb::new(255, 87, 87),
    Rgb::new(52, 191, 163),
    Rgb::new(87, 95, 207),
    Rgb::new(255, 190, 92),
    Rgb::new(139, 87, 207),
    Rgb::new(95, 207, 87),
    Rgb::new(255, 150, 102),
];

/// The seven tetromino piece kinds
///
/// The declaration order is the shape index used for palette lookup and random
/// selection: I, O, T, L, J, S, Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// Number of piece kinds
    pub const COUNT: usize = 7;

    /// Every kind, in shape-index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Shape index in `0..7`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by shape index
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Palette color for this kind
    pub const fn color(self) -> Rgb {
        PIECE_COLORS[self.index()]
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}
