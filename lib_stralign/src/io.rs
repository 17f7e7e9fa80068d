use std::str::FromStr;

use nom::{
    IResult, Parser,
    character::complete::{char, line_ending, satisfy},
    combinator::eof,
    multi::many0,
    number::complete::recognize_float,
};
use num_traits::Float;

use crate::error::Error;

pub fn parse_whitespace(input: &str) -> IResult<&str, ()> {
    skip_whitespace(input).map(|input| (input, ()))
}

pub fn parse_any_whitespace(input: &str) -> IResult<&str, ()> {
    skip_any_whitespace(input).map(|input| (input, ()))
}

pub fn skip_whitespace(
    input: &str,
) -> std::result::Result<&str, nom::Err<nom::error::Error<&str>>> {
    many0(satisfy(is_whitespace))
        .parse(input)
        .map(|(input, _)| input)
}

pub fn skip_any_whitespace(
    input: &str,
) -> std::result::Result<&str, nom::Err<nom::error::Error<&str>>> {
    many0(satisfy(is_any_whitespace))
        .parse(input)
        .map(|(input, _)| input)
}

/// Skips lines that contain nothing but whitespace, including a last line without line break.
///
/// Stops at the start of the first line with other content, so leading whitespace of that line is kept.
pub fn skip_blank_lines(
    mut input: &str,
) -> std::result::Result<&str, nom::Err<nom::error::Error<&str>>> {
    loop {
        let line_rest = skip_whitespace(input)?;
        if line_rest.is_empty() {
            return Ok(line_rest);
        }

        match line_ending::<_, nom::error::Error<&str>>(line_rest) {
            Ok((next_line, _)) => input = next_line,
            Err(_) => return Ok(input),
        }
    }
}

/// Parses trailing whitespace and the end of a line or of the input.
pub fn parse_line_end(input: &str) -> IResult<&str, ()> {
    let input = skip_whitespace(input)?;
    if input.is_empty() {
        eof(input).map(|(input, _)| (input, ()))
    } else {
        line_ending(input).map(|(input, _)| (input, ()))
    }
}

pub fn is_any_whitespace(c: char) -> bool {
    is_whitespace(c) || is_any_line_break(c)
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_any_line_break(c)
}

pub fn is_any_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Parses a real number, additionally accepting `inf` with an optional sign.
pub fn parse_score_value<Score: FromStr + Float>(input: &str) -> IResult<&str, Score> {
    let (unsigned_input, negative) = match char::<_, nom::error::Error<&str>>('-')(input) {
        Ok((input, _)) => (input, true),
        Err(_) => (
            char::<_, nom::error::Error<&str>>('+')(input)
                .map(|(input, _)| input)
                .unwrap_or(input),
            false,
        ),
    };

    if let Some(remaining_input) = unsigned_input.strip_prefix("inf") {
        if negative {
            Ok((remaining_input, Score::neg_infinity()))
        } else {
            Ok((remaining_input, Score::infinity()))
        }
    } else {
        let (remaining_input, number) = recognize_float(input)?;
        let result = Score::from_str(number).map_err(|_| {
            nom::Err::Failure(nom::error::Error {
                input,
                code: nom::error::ErrorKind::Float,
            })
        })?;

        Ok((remaining_input, result))
    }
}

pub fn translate_nom_error(error: nom::Err<nom::error::Error<&str>>) -> Error {
    match error {
        nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
        nom::Err::Error(error) | nom::Err::Failure(error) => Error::Parser {
            input: error.input.to_string(),
            kind: error.code,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_line_end, parse_score_value, skip_blank_lines};

    #[test]
    fn score_values() {
        assert_eq!(parse_score_value::<f32>("-2 rest"), Ok((" rest", -2.0)));
        assert_eq!(parse_score_value::<f32>("+1.5\n"), Ok(("\n", 1.5)));
        assert_eq!(parse_score_value::<f64>("0.25"), Ok(("", 0.25)));
        assert_eq!(
            parse_score_value::<f32>("-inf"),
            Ok(("", f32::NEG_INFINITY))
        );
        assert_eq!(parse_score_value::<f32>("inf x"), Ok((" x", f32::INFINITY)));
        assert!(parse_score_value::<f32>("abc").is_err());
    }

    #[test]
    fn line_ends() {
        assert_eq!(parse_line_end("  \nnext"), Ok(("next", ())));
        assert_eq!(parse_line_end("\t"), Ok(("", ())));
        assert!(parse_line_end(" x\n").is_err());
    }

    #[test]
    fn blank_lines() {
        assert_eq!(skip_blank_lines("\n  \n\t\r\n AB 1"), Ok(" AB 1"));
        assert_eq!(skip_blank_lines("AB 1\n"), Ok("AB 1\n"));
        assert_eq!(skip_blank_lines("  \n   "), Ok(""));
        assert_eq!(skip_blank_lines(""), Ok(""));
    }
}
