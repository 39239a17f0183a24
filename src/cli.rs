//! Command-line front end for inspecting pieces and the high-score table.
//!
//! ```text
//! blockfall scores [--store PATH]
//! blockfall add SCORE [--store PATH]
//! blockfall piece [--seed N] [--rotate N]
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::core::{SimpleRng, Tetromino};
use crate::scores::{HighScores, StoreConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the table.
    Scores { store: Option<PathBuf> },
    /// Add one score, then print the table.
    Add { score: String, store: Option<PathBuf> },
    /// Spawn one piece and print it after `rotations` quarter turns.
    Piece { seed: Option<u32>, rotations: i32 },
}

pub const USAGE: &str = "usage:
  blockfall scores [--store PATH]
  blockfall add SCORE [--store PATH]
  blockfall piece [--seed N] [--rotate N]";

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let (name, rest) = args
        .split_first()
        .ok_or_else(|| anyhow!("missing command\n{}", USAGE))?;

    match name.as_str() {
        "scores" => {
            let mut store = None;
            let mut i = 0usize;
            while i < rest.len() {
                match rest[i].as_str() {
                    "--store" => {
                        i += 1;
                        store = Some(PathBuf::from(value_for(rest, i, "scores", "--store")?));
                    }
                    other => return Err(anyhow!("scores: unknown argument: {}", other)),
                }
                i += 1;
            }
            Ok(Command::Scores { store })
        }
        "add" => {
            let mut score = None;
            let mut store = None;
            let mut i = 0usize;
            while i < rest.len() {
                match rest[i].as_str() {
                    "--store" => {
                        i += 1;
                        store = Some(PathBuf::from(value_for(rest, i, "add", "--store")?));
                    }
                    other if score.is_none() => score = Some(other.to_string()),
                    other => return Err(anyhow!("add: unexpected argument: {}", other)),
                }
                i += 1;
            }
            let score = score.ok_or_else(|| anyhow!("add: missing SCORE"))?;
            Ok(Command::Add { score, store })
        }
        "piece" => {
            let mut seed = None;
            let mut rotations = 0i32;
            let mut i = 0usize;
            while i < rest.len() {
                match rest[i].as_str() {
                    "--seed" => {
                        i += 1;
                        let v = value_for(rest, i, "piece", "--seed")?;
                        seed = Some(
                            v.parse::<u32>()
                                .map_err(|_| anyhow!("piece: invalid --seed value: {}", v))?,
                        );
                    }
                    "--rotate" => {
                        i += 1;
                        let v = value_for(rest, i, "piece", "--rotate")?;
                        rotations = v
                            .parse::<i32>()
                            .map_err(|_| anyhow!("piece: invalid --rotate value: {}", v))?;
                    }
                    other => return Err(anyhow!("piece: unknown argument: {}", other)),
                }
                i += 1;
            }
            Ok(Command::Piece { seed, rotations })
        }
        other => Err(anyhow!("unknown command: {}\n{}", other, USAGE)),
    }
}

fn value_for<'a>(args: &'a [String], i: usize, cmd: &str, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{}: missing value for {}", cmd, flag))
}

/// Execute `command`, writing human-readable output to `out`.
pub fn run(command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Scores { store } => {
            let table = HighScores::load(&store_config(store));
            print_table(&table, out)
        }
        Command::Add { score, store } => {
            let mut table = HighScores::load(&store_config(store));
            table.add_score_str(score)?;
            print_table(&table, out)
        }
        Command::Piece { seed, rotations } => {
            let mut piece = match seed {
                Some(seed) => Tetromino::spawn(&mut SimpleRng::new(*seed)),
                None => Tetromino::random(),
            };
            // Four quarter turns are the identity.
            let direction = rotations.signum();
            for _ in 0..rotations.unsigned_abs() % 4 {
                piece.rotate(direction);
            }
            writeln!(out, "kind: {} (index {})", piece.kind(), piece.shape_index())?;
            writeln!(out, "color: {}", piece.color())?;
            writeln!(out, "position: ({}, {})", piece.x(), piece.y())?;
            writeln!(out, "{}", piece.shape())?;
            Ok(())
        }
    }
}

fn store_config(store: &Option<PathBuf>) -> StoreConfig {
    match store {
        Some(path) => StoreConfig::new(path.clone()),
        None => StoreConfig::from_env(),
    }
}

fn print_table(table: &HighScores, out: &mut impl Write) -> Result<()> {
    let top = table.top_scores();
    if top.is_empty() {
        writeln!(out, "no scores recorded")?;
        return Ok(());
    }
    for (rank, score) in top.iter().enumerate() {
        writeln!(out, "{}. {}", rank + 1, score)?;
    }
    writeln!(out, "best: {}", table.highest_score())?;
    Ok(())
}
