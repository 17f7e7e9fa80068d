use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Result, anyhow};
use lib_stralign::codec::{CodepointSequence, decode_all};
use log::debug;

/// Read one string per line.
///
/// Line endings (`\n` or `\r\n`) are not part of the strings.
/// A line break at the end of the file does not start another string, but empty lines before are kept as empty strings.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<CodepointSequence>> {
    let path = path.as_ref();
    debug!("Reading input file {path:?}");

    let reader = BufReader::new(
        File::open(path).map_err(|error| anyhow!("Unable to open input file {path:?}: {error}"))?,
    );

    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        let mut line =
            line.map_err(|error| anyhow!("Error reading from input file {path:?}: {error}"))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(line);
    }

    let strings = decode_all(lines)
        .map_err(|error| anyhow!("Input file {path:?} is malformed: {error}"))?;
    debug!("Read {} strings", strings.len());
    Ok(strings)
}
