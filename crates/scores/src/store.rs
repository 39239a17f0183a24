//! JSON file I/O for the score table.
//!
//! The file holds a bare JSON array of integers, e.g. `[9000,4500,1200]`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::score::RawScore;

/// Read and coerce every entry. Any failure fails the whole load.
pub fn load_scores(path: &Path) -> Result<Vec<u64>> {
    info!("Loading high scores from {}", path.display());
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<RawScore> =
        serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
    let scores = raw
        .iter()
        .map(RawScore::coerce)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("coercing scores in {}", path.display()))?;
    Ok(scores)
}

/// Overwrite the file with `scores`, creating parent directories as needed.
pub fn save_scores(path: &Path, scores: &[u64]) -> Result<()> {
    info!("Saving {} high scores to {}", scores.len(), path.display());
    let data = serde_json::to_vec(scores)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, &data).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
