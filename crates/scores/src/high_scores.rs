//! Persisted top-5 high-score table.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, warn};

use crate::config::StoreConfig;
use crate::score::parse_score;
use crate::store;
use crate::types::MAX_HIGH_SCORES;

/// Ranked list of distinct scores, best first, backed by a JSON file.
///
/// The table is read once when constructed and written back after every
/// accepted [`add_score`](HighScores::add_score).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScores {
    scores: Vec<u64>,
    path: PathBuf,
}

impl HighScores {
    /// Load the table described by `config`.
    ///
    /// A missing, unreadable or malformed store yields an empty table.
    pub fn load(config: &StoreConfig) -> Self {
        Self::open(config.path())
    }

    /// Load the table stored at `path`. Same recovery rules as [`HighScores::load`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut scores = if path.exists() {
            store::load_scores(&path).unwrap_or_else(|e| {
                warn!("Discarding high-score store {}: {:#}", path.display(), e);
                Vec::new()
            })
        } else {
            debug!("No high-score store at {}", path.display());
            Vec::new()
        };
        rank(&mut scores);
        Self { scores, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best score, or 0 for an empty table.
    pub fn highest_score(&self) -> u64 {
        self.scores.first().copied().unwrap_or(0)
    }

    /// At most five scores, best first.
    pub fn top_scores(&self) -> &[u64] {
        &self.scores[..self.scores.len().min(MAX_HIGH_SCORES)]
    }

    pub fn contains(&self, score: u64) -> bool {
        self.scores.contains(&score)
    }

    /// Record `score` and persist the table.
    ///
    /// A score already in the table is ignored and nothing is written. A score
    /// too low to rank still causes a write of the unchanged table. Write
    /// failures are returned to the caller.
    pub fn add_score(&mut self, score: u64) -> Result<()> {
        if self.contains(score) {
            debug!("Score {} already recorded", score);
            return Ok(());
        }
        self.scores.push(score);
        rank(&mut self.scores);
        self.scores.truncate(MAX_HIGH_SCORES);
        self.save()
    }

    /// Coerce `input` to a score, then [`add_score`](HighScores::add_score).
    ///
    /// Input that is not a non-negative number fails with a
    /// [`ScoreParseError`](crate::ScoreParseError) and leaves the store untouched.
    pub fn add_score_str(&mut self, input: &str) -> Result<()> {
        let score = parse_score(input)?;
        self.add_score(score)
    }

    /// Overwrite the store with the current table.
    pub fn save(&self) -> Result<()> {
        store::save_scores(&self.path, &self.scores)
    }
}

/// Sort descending and drop duplicates.
fn rank(scores: &mut Vec<u64>) {
    scores.sort_unstable_by(|a, b| b.cmp(a));
    scores.dedup();
}
