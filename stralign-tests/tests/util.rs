use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use stralign::{align, distance, rank};

pub fn run_in_repo_root(args: &str) -> Result<()> {
    // The manifest directory is this crate, which lives directly in the workspace root.
    // Simulate a call from the repo root by using its parent directory.
    env::set_current_dir(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .ok_or(anyhow!("No parent directory"))?,
    )?;

    if args.starts_with("align ") {
        let args = align::Cli::parse_from(args.split_whitespace());
        align::cli(args)
    } else if args.starts_with("rank ") {
        let args = rank::Cli::parse_from(args.split_whitespace());
        rank::cli(args)
    } else if args.starts_with("distance ") {
        let args = distance::Cli::parse_from(args.split_whitespace());
        distance::cli(args)
    } else {
        Err(anyhow!("Unknown command: {args}"))
    }
}

/// A path in the temporary directory that is unique to the calling test.
pub fn output_path(test_name: &str) -> PathBuf {
    env::temp_dir().join(format!("stralign-tests-{}-{test_name}", std::process::id()))
}
