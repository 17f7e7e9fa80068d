use anyhow::Result;
use clap::Parser;
use stralign::{align, distance, rank};

#[derive(Parser)]
#[command(version, about)]
enum Cli {
    /// Align a set of strings into a multiple alignment.
    Align(align::Cli),
    /// Rank all pairs of strings by their edit distance.
    Rank(rank::Cli),
    /// Compute the edit distance of two strings.
    Distance(distance::Cli),
}

fn main() -> Result<()> {
    match Cli::parse() {
        Cli::Align(cli) => align::cli(cli),
        Cli::Rank(cli) => rank::cli(cli),
        Cli::Distance(cli) => distance::cli(cli),
    }
}
