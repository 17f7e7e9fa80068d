use anyhow::Result;
use clap::Parser;
use lib_stralign::{codec::CodepointSequence, edit_distance::distance};
use log::LevelFilter;

use crate::initialise_logging;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The first string.
    #[clap(long, short = 'a')]
    first: String,

    /// The second string.
    #[clap(long, short = 'b')]
    second: String,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    let first = CodepointSequence::from(cli.first.as_str());
    let second = CodepointSequence::from(cli.second.as_str());
    println!("{}", distance(&first, &second));

    Ok(())
}
