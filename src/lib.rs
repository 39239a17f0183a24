//! Blockfall (workspace facade crate).
//!
//! Re-exports the piece model, the high-score store and the shared types under
//! one `blockfall::{core,scores,types}` namespace; the implementation lives in
//! dedicated crates under `crates/`.

pub mod cli;

pub use blockfall_core as core;
pub use blockfall_scores as scores;
pub use blockfall_types as types;
