use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}.")]
    Io(#[from] std::io::Error),

    #[error("A parsing error of kind '{kind:?}' occurred when the remaining input was '{input}'.")]
    Parser {
        input: String,
        kind: nom::error::ErrorKind,
    },

    #[error("Parsing was unsuccessful due to incomplete input: {0:?}.")]
    ParserIncomplete(nom::Needed),

    #[error("Invalid argument: {0}.")]
    InvalidArgument(String),

    #[error(
        "The substitution matrix has no score for the characters '{first}' and '{second}'{}. Add the key '{first}{second}' to the matrix.",
        describe_sequence_index(.sequence_index)
    )]
    MissingSubstitutionScore {
        first: char,
        second: char,
        sequence_index: Option<usize>,
    },

    #[error(
        "The input{} is not valid UTF-8 after byte {valid_up_to}.",
        describe_sequence_index(.sequence_index)
    )]
    Encoding {
        sequence_index: Option<usize>,
        valid_up_to: usize,
    },

    #[error("A substitution matrix key must consist of exactly two characters, but was '{0}'.")]
    InvalidSubstitutionKey(String),

    #[error("The substitution matrix key '{0}' was encountered twice.")]
    DuplicateSubstitutionKey(String),
}

fn describe_sequence_index(sequence_index: &Option<usize>) -> String {
    sequence_index
        .map(|sequence_index| format!(" (input sequence {sequence_index})"))
        .unwrap_or_default()
}
