//! `blockfall` command-line entrypoint.
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=info blockfall scores`).

use std::io;

use anyhow::Result;

use blockfall::cli::{parse_args, run};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    log::debug!("running {:?}", command);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&command, &mut out)
}
