use std::{fmt::Display, io::Write, str::FromStr};

use log::trace;
use nom::{IResult, Parser, character::complete::satisfy, multi::many1};
use num_traits::Float;

use super::{SubstitutionKey, SubstitutionMatrix};
use crate::{
    error::Result,
    io::{is_any_line_break, is_whitespace, parse_line_end, parse_score_value, skip_blank_lines},
};

#[cfg(test)]
mod tests;

impl<Score: Copy + Display> SubstitutionMatrix<Score> {
    /// Write the matrix, one entry per line in ascending key order.
    pub fn write_plain(&self, mut writer: impl Write) -> Result<()> {
        for (key, score) in self.iter_sorted() {
            writeln!(writer, "{key} {score}")?;
        }
        Ok(())
    }
}

impl<Score: Copy + FromStr + Float> SubstitutionMatrix<Score> {
    /// Parse matrix entries until the end of the input.
    ///
    /// Each entry is a line starting with exactly two characters (the key), followed by whitespace and the score.
    /// Since the key is positional, it may contain whitespace itself.
    /// Lines containing only whitespace are skipped.
    pub(crate) fn parse_plain(
        mut input: &str,
    ) -> IResult<&str, Vec<(SubstitutionKey, Score)>> {
        let mut entries = Vec::new();

        loop {
            input = skip_blank_lines(input)?;
            if input.is_empty() {
                break;
            }

            let (next_input, entry) = parse_entry(input)?;
            input = next_input;
            entries.push(entry);
        }

        trace!("Parsed {} substitution matrix entries", entries.len());
        Ok((input, entries))
    }
}

fn parse_entry<Score: FromStr + Float>(input: &str) -> IResult<&str, (SubstitutionKey, Score)> {
    let (input, (first, second)) = (
        satisfy(|c| !is_any_line_break(c)),
        satisfy(|c| !is_any_line_break(c)),
    )
        .parse(input)?;
    let (input, _) = many1(satisfy(is_whitespace)).parse(input)?;
    let (input, score) = parse_score_value(input)?;
    let (input, ()) = parse_line_end(input)?;

    Ok((input, (SubstitutionKey::new(first, second), score)))
}
