use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Result, anyhow};
use clap::Parser;
use lib_stralign::pairwise_ranking::{PairDistance, rank_all};
use log::{LevelFilter, info};

use crate::{initialise_logging, input::read_lines};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// A UTF-8 text file containing one string per line.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// The file to store the ranking in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct Ranking {
    pairs: Vec<PairDistance>,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    let strings = read_lines(&cli.input)?;
    info!("Ranking all pairs of {} strings", strings.len());
    let pairs = rank_all(&strings);

    if let Some(output) = &cli.output {
        info!("Writing ranking to {output:?}");
        let mut output = BufWriter::new(
            File::create(output)
                .map_err(|error| anyhow!("Unable to create output file {output:?}: {error}"))?,
        );
        write!(output, "{}", toml::to_string(&Ranking { pairs })?)?;
        output.flush()?;
    } else {
        for pair in pairs {
            println!("{pair}");
        }
    }

    Ok(())
}
