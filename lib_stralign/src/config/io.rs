use std::{fmt::Display, io::Write, str::FromStr};

use log::trace;
use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_while1},
    character::complete::line_ending,
};
use num_traits::Float;

use super::AlignmentConfiguration;
use crate::{
    error::Result,
    io::{
        parse_any_whitespace, parse_line_end, parse_score_value, parse_whitespace,
        skip_any_whitespace, translate_nom_error,
    },
    substitution_matrix::{SubstitutionKey, SubstitutionMatrix},
};


impl<Score: Copy + FromStr + Float> AlignmentConfiguration<Score> {
    pub fn read_plain(mut reader: impl std::io::Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let (gap_open, gap_extend, entries) = Self::parse_plain(&input)
            .map(|(_, result)| result)
            .map_err(translate_nom_error)?;

        Ok(Self {
            gap_open,
            gap_extend,
            substitution_matrix: SubstitutionMatrix::from_entries(entries)?,
        })
    }

    #[allow(clippy::type_complexity)]
    fn parse_plain(input: &str) -> IResult<&str, (Score, Score, Vec<(SubstitutionKey, Score)>)> {
        trace!("Parsing gap costs");
        let (input, ()) = parse_specific_name("Gap Costs")(input)?;
        let (input, gap_open) = parse_specific_equals_value("gap_open")(input)?;
        let (input, gap_extend) = parse_specific_equals_value("gap_extend")(input)?;

        trace!("Parsing substitution matrix");
        let (input, ()) = parse_specific_name("Substitution Matrix")(input)?;
        let (input, entries) = SubstitutionMatrix::parse_plain(input)?;

        Ok((input, (gap_open, gap_extend, entries)))
    }
}

impl<Score: Copy + Display> AlignmentConfiguration<Score> {
    pub fn write_plain(&self, mut writer: impl Write) -> Result<()> {
        writeln!(writer, "# Gap Costs")?;
        writeln!(writer, "gap_open = {}", self.gap_open)?;
        writeln!(writer, "gap_extend = {}", self.gap_extend)?;
        writeln!(writer)?;
        writeln!(writer, "# Substitution Matrix")?;
        self.substitution_matrix.write_plain(writer)
    }
}

fn parse_specific_name(name: &str) -> impl '_ + FnMut(&str) -> IResult<&str, ()> {
    move |input| {
        (
            parse_any_whitespace,
            tag("#"),
            parse_whitespace,
            tag(name),
            parse_whitespace,
            line_ending,
        )
            .parse(input)
            .map(|(input, _)| (input, ()))
    }
}

fn parse_specific_equals_value<Value: FromStr + Float>(
    identifier: &str,
) -> impl '_ + FnMut(&str) -> IResult<&str, Value> {
    move |input| {
        let (input, (actual_identifier, value)) = parse_equals_value(input)?;
        if actual_identifier == identifier {
            Ok((input, value))
        } else {
            Err(nom::Err::Failure(nom::error::Error {
                input,
                code: nom::error::ErrorKind::Verify,
            }))
        }
    }
}

fn parse_equals_value<Value: FromStr + Float>(input: &str) -> IResult<&str, (&str, Value)> {
    let input = skip_any_whitespace(input)?;
    let (input, identifier) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let (input, _) = (parse_whitespace, tag("="), parse_whitespace).parse(input)?;
    let (input, value) = parse_score_value(input)?;
    let (input, ()) = parse_line_end(input)?;

    Ok((input, (identifier, value)))
}
