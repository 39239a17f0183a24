//! Score coercion.
//!
//! Scores are stored as non-negative integers, but both the store file and
//! callers may hand over other representations: JSON floats are truncated
//! toward zero and integer strings are parsed. Anything else, including
//! fractional or exponent text, is rejected.

use std::fmt;

use serde::Deserialize;

/// A score value that could not be turned into a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    input: String,
}

impl ScoreParseError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input, as received.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid score: {:?} is not a non-negative integer", self.input)
    }
}

impl std::error::Error for ScoreParseError {}

/// Coerce integer text into a score.
///
/// Surrounding whitespace and a leading sign are accepted (`"-0"` is zero).
/// Text with a fractional part or exponent (`"99.9"`, `"1e3"`) is rejected.
pub fn parse_score(input: &str) -> Result<u64, ScoreParseError> {
    input
        .trim()
        .parse::<i128>()
        .ok()
        .and_then(|v| u64::try_from(v).ok())
        .ok_or_else(|| ScoreParseError::new(input))
}

/// Truncate toward zero; negative, NaN and out-of-range values are rejected.
fn coerce_float(v: f64) -> Option<u64> {
    let truncated = v.trunc();
    if truncated.is_finite() && truncated >= 0.0 && truncated < u64::MAX as f64 {
        Some(truncated as u64)
    } else {
        None
    }
}

/// One entry of the store file before coercion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawScore {
    Int(u64),
    Float(f64),
    Text(String),
}

impl RawScore {
    pub(crate) fn coerce(&self) -> Result<u64, ScoreParseError> {
        match self {
            RawScore::Int(v) => Ok(*v),
            RawScore::Float(v) => coerce_float(*v).ok_or_else(|| ScoreParseError::new(v.to_string())),
            RawScore::Text(s) => parse_score(s),
        }
    }
}
