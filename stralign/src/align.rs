use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Result, anyhow};
use clap::Parser;
use lib_stralign::{
    config::AlignmentConfiguration, progressive_aligner::align_all,
    substitution_matrix::SubstitutionMatrix,
};
use log::{LevelFilter, info, warn};

use crate::{initialise_logging, input::read_lines};

const DEFAULT_GAP_OPEN: f32 = -3.0;
const DEFAULT_GAP_EXTEND: f32 = -0.5;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// A UTF-8 text file containing one string per line.
    ///
    /// The strings are aligned in the order they appear in the file.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// The file to store the aligned strings in, one per line.
    ///
    /// If not given, the aligned strings are printed to stdout.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// An alignment configuration file with gap scores and a substitution matrix.
    ///
    /// If not given, a uniform substitution matrix over all characters of the input is used,
    /// see `--match-score` and `--substitution-score`.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// The score for opening a gap, overriding the configuration.
    #[clap(long, allow_negative_numbers = true)]
    gap_open: Option<f32>,

    /// The score for extending a gap, overriding the configuration.
    #[clap(long, allow_negative_numbers = true)]
    gap_extend: Option<f32>,

    /// The score for aligning two equal characters if no configuration is given.
    #[clap(long, default_value = "2", allow_negative_numbers = true)]
    match_score: f32,

    /// The score for aligning two different characters if no configuration is given.
    #[clap(long, default_value = "-1", allow_negative_numbers = true)]
    substitution_score: f32,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    let strings = read_lines(&cli.input)?;

    let mut configuration = if let Some(config) = &cli.config {
        info!("Loading alignment configuration {config:?}");
        let configuration = AlignmentConfiguration::<f32>::read_plain(BufReader::new(
            File::open(config)
                .map_err(|error| anyhow!("Unable to open configuration file {config:?}: {error}"))?,
        ))?;
        info!(
            "Loaded substitution matrix with {} entries",
            configuration.substitution_matrix.len()
        );
        configuration
    } else {
        info!(
            "Using uniform substitution matrix with match score {} and substitution score {}",
            cli.match_score, cli.substitution_score
        );
        AlignmentConfiguration::new(
            SubstitutionMatrix::new_uniform(
                strings.iter().flat_map(|string| string.iter().copied()),
                cli.match_score,
                cli.substitution_score,
            ),
            DEFAULT_GAP_OPEN,
            DEFAULT_GAP_EXTEND,
        )
    };

    if let Some(gap_open) = cli.gap_open {
        configuration.gap_open = gap_open;
    }
    if let Some(gap_extend) = cli.gap_extend {
        configuration.gap_extend = gap_extend;
    }
    if configuration.gap_open > 0.0 || configuration.gap_extend > 0.0 {
        warn!("Positive gap scores reward gaps, the alignment may consist mostly of gaps");
    }

    info!(
        "Aligning {} strings with gap open score {} and gap extend score {}",
        strings.len(),
        configuration.gap_open,
        configuration.gap_extend
    );
    let alignment = align_all(strings, &configuration)?;
    info!("Alignment has {} columns", alignment.column_count());

    if let Some(output) = &cli.output {
        info!("Writing alignment to {output:?}");
        let mut output = BufWriter::new(
            File::create(output)
                .map_err(|error| anyhow!("Unable to create output file {output:?}: {error}"))?,
        );
        write!(output, "{alignment}")?;
        output.flush()?;
    } else {
        print!("{alignment}");
    }

    Ok(())
}
