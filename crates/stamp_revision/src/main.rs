// crates/stamp_revision/src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io;

use stamp_revision::config::{Cli, StampConfig};
use stamp_revision::logging;
use stamp_revision::services::GitRevision;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = StampConfig::from_cli(&cli);
    logging::init(&config)?;
    log::debug!("{:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    stamp_revision::run(&GitRevision::default(), stdin.lock(), stdout.lock())?;
    Ok(())
}
