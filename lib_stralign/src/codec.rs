//! Conversion between encoded text and the codepoint sequences the aligners work on.

use std::{
    fmt::{Display, Write},
    ops::{Deref, Index},
    str::FromStr,
};

use crate::error::{Error, Result};

/// The character used to represent gaps in alignment output.
///
/// It is not expected to occur in real input.
pub const GAP_MARKER: char = '⋄';

/// An immutable sequence of unicode scalar values.
///
/// Indexing is by codepoint position, not by byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodepointSequence {
    codepoints: Vec<char>,
}

impl CodepointSequence {
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }
}

/// Decode UTF-8 encoded text into a codepoint sequence.
pub fn decode(encoded_text: &[u8]) -> Result<CodepointSequence> {
    std::str::from_utf8(encoded_text)
        .map(CodepointSequence::from)
        .map_err(|error| Error::Encoding {
            sequence_index: None,
            valid_up_to: error.valid_up_to(),
        })
}

/// Decode a list of UTF-8 encoded texts.
///
/// On failure, the error names the index of the first malformed text.
pub fn decode_all<Text: AsRef<[u8]>>(
    encoded_texts: impl IntoIterator<Item = Text>,
) -> Result<Vec<CodepointSequence>> {
    encoded_texts
        .into_iter()
        .enumerate()
        .map(|(sequence_index, encoded_text)| {
            decode(encoded_text.as_ref()).map_err(|error| match error {
                Error::Encoding { valid_up_to, .. } => Error::Encoding {
                    sequence_index: Some(sequence_index),
                    valid_up_to,
                },
                error => error,
            })
        })
        .collect()
}

/// Encode a codepoint sequence as UTF-8 text.
pub fn encode(sequence: &CodepointSequence) -> String {
    sequence.codepoints.iter().collect()
}

impl From<&str> for CodepointSequence {
    fn from(value: &str) -> Self {
        Self {
            codepoints: value.chars().collect(),
        }
    }
}

impl From<Vec<char>> for CodepointSequence {
    fn from(codepoints: Vec<char>) -> Self {
        Self { codepoints }
    }
}

impl FromIterator<char> for CodepointSequence {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self {
            codepoints: iter.into_iter().collect(),
        }
    }
}

impl FromStr for CodepointSequence {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl Deref for CodepointSequence {
    type Target = [char];

    fn deref(&self) -> &Self::Target {
        &self.codepoints
    }
}

impl Index<usize> for CodepointSequence {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.codepoints[index]
    }
}

impl<'a> IntoIterator for &'a CodepointSequence {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.codepoints.iter()
    }
}

impl Display for CodepointSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &c in &self.codepoints {
            f.write_char(c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::{CodepointSequence, GAP_MARKER, decode, decode_all, encode};

    #[test]
    fn indexing_is_by_codepoint() {
        let sequence = decode("Be ‘MOJAVE".as_bytes()).unwrap();
        assert_eq!(sequence.len(), 10);
        assert_eq!(sequence[3], '‘');
        assert_eq!(sequence[4], 'M');
    }

    #[test]
    fn encode_restores_text() {
        for text in ["", "abc", "E. MOJAVE DESERT , PROVIDENCE", "A⋄C", "“above"] {
            let sequence = decode(text.as_bytes()).unwrap();
            assert_eq!(encode(&sequence), text);
            assert_eq!(decode(encode(&sequence).as_bytes()).unwrap(), sequence);
        }
    }

    #[test]
    fn malformed_input() {
        let error = decode(&[b'a', b'b', 0xff, b'c']).unwrap_err();
        assert!(matches!(
            error,
            Error::Encoding {
                sequence_index: None,
                valid_up_to: 2
            }
        ));

        let error = decode_all([b"ok".as_slice(), [b'x', 0xc3].as_slice()]).unwrap_err();
        assert!(matches!(
            error,
            Error::Encoding {
                sequence_index: Some(1),
                valid_up_to: 1
            }
        ));
    }

    #[test]
    fn display_with_gaps() {
        let sequence: CodepointSequence = ['a', GAP_MARKER, GAP_MARKER, 'b'].into_iter().collect();
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.to_string(), "a⋄⋄b");
        assert_eq!(sequence.to_string(), encode(&sequence));
    }
}
