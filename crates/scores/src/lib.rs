//! High-score persistence
//!
//! A small ranked table of the best five distinct scores, stored as a bare
//! JSON array next to the game executable (or wherever [`StoreConfig`] points).
//!
//! # Failure model
//!
//! - **Load**: a missing, unreadable or malformed store is logged and treated
//!   as an empty table. Construction never fails.
//! - **Save**: I/O errors are returned as [`anyhow::Error`] with the store path
//!   in the context chain.
//! - **Input**: text that is not a non-negative number is rejected with
//!   [`ScoreParseError`].
//!
//! # Example
//!
//! ```no_run
//! use blockfall_scores::{HighScores, StoreConfig};
//!
//! let mut table = HighScores::load(&StoreConfig::from_env());
//! table.add_score(4500)?;
//! println!("best: {}", table.highest_score());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod high_scores;
pub mod score;
pub mod store;

pub use blockfall_types as types;

pub use config::StoreConfig;
pub use high_scores::HighScores;
pub use score::{parse_score, ScoreParseError};
