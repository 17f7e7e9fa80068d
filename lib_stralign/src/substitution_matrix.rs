use std::{collections::hash_map::Entry, fmt::Display, str::FromStr};

use log::warn;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

pub mod io;

/// A pair of codepoints identifying a substitution score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubstitutionKey([char; 2]);

/// A sparse, symmetric table of substitution scores between codepoints.
///
/// Only the canonical key of a pair (the key with its codepoints in ascending order) is ever looked up.
/// A pair without an entry has no score, there is no default.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionMatrix<Score> {
    scores: FxHashMap<SubstitutionKey, Score>,
}

impl SubstitutionKey {
    /// The key as written, without reordering its codepoints.
    pub fn new(first: char, second: char) -> Self {
        Self([first, second])
    }

    /// The key of the unordered pair `{x, y}`.
    pub fn canonical(x: char, y: char) -> Self {
        if x <= y {
            Self([x, y])
        } else {
            Self([y, x])
        }
    }

    pub fn first(&self) -> char {
        self.0[0]
    }

    pub fn second(&self) -> char {
        self.0[1]
    }

    pub fn is_canonical(&self) -> bool {
        self.0[0] <= self.0[1]
    }
}

impl<Score: Copy> SubstitutionMatrix<Score> {
    pub fn new() -> Self {
        Self {
            scores: Default::default(),
        }
    }

    /// Build a matrix from keys given as two-character strings.
    pub fn from_string_entries<Key: AsRef<str>>(
        entries: impl IntoIterator<Item = (Key, Score)>,
    ) -> Result<Self> {
        let entries = entries
            .into_iter()
            .map(|(key, score)| Ok((key.as_ref().parse::<SubstitutionKey>()?, score)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_entries(entries)
    }

    /// Build a matrix from keys and scores, rejecting duplicate keys.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (SubstitutionKey, Score)>,
    ) -> Result<Self> {
        let mut result = Self::new();
        for (key, score) in entries {
            result.insert(key, score)?;
        }
        Ok(result)
    }

    /// Build a complete matrix over the given characters with one score for identical and one for distinct characters.
    pub fn new_uniform(
        characters: impl IntoIterator<Item = char>,
        match_score: Score,
        substitution_score: Score,
    ) -> Self {
        let mut characters: Vec<_> = characters.into_iter().collect();
        characters.sort_unstable();
        characters.dedup();

        let mut scores = FxHashMap::default();
        for (index, &first) in characters.iter().enumerate() {
            for &second in &characters[index..] {
                let score = if first == second {
                    match_score
                } else {
                    substitution_score
                };
                scores.insert(SubstitutionKey::new(first, second), score);
            }
        }

        Self { scores }
    }

    /// Insert a score.
    ///
    /// The key is stored as given. A key whose codepoints are not in ascending order is accepted, but is never looked up.
    /// If the key is already present, the matrix stays unchanged.
    pub fn insert(&mut self, key: SubstitutionKey, score: Score) -> Result<()> {
        if !key.is_canonical() {
            warn!(
                "Substitution matrix key '{key}' is not in ascending order, it will never be used; write it as '{}'",
                SubstitutionKey::canonical(key.first(), key.second())
            );
        }

        match self.scores.entry(key) {
            Entry::Occupied(_) => Err(Error::DuplicateSubstitutionKey(key.to_string())),
            Entry::Vacant(entry) => {
                entry.insert(score);
                Ok(())
            }
        }
    }

    /// The score of substituting `x` with `y`, or vice versa.
    pub fn score(&self, x: char, y: char) -> Result<Score> {
        let key = SubstitutionKey::canonical(x, y);
        self.scores
            .get(&key)
            .copied()
            .ok_or(Error::MissingSubstitutionScore {
                first: key.first(),
                second: key.second(),
                sequence_index: None,
            })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over all entries in ascending key order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (SubstitutionKey, Score)> {
        let mut entries: Vec<_> = self.scores.iter().map(|(&key, &score)| (key, score)).collect();
        entries.sort_unstable_by_key(|&(key, _)| key);
        entries.into_iter()
    }
}

impl<Score: Copy> Default for SubstitutionMatrix<Score> {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SubstitutionKey {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut characters = s.chars();
        match (characters.next(), characters.next(), characters.next()) {
            (Some(first), Some(second), None) => Ok(Self::new(first, second)),
            _ => Err(Error::InvalidSubstitutionKey(s.to_string())),
        }
    }
}

impl Display for SubstitutionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::{SubstitutionKey, SubstitutionMatrix};

    #[test]
    fn lookup_is_symmetric() {
        let matrix =
            SubstitutionMatrix::from_string_entries([("AA", 0.0f32), ("AC", -1.0), ("CC", 2.0)])
                .unwrap();
        assert_eq!(matrix.score('A', 'C').unwrap(), -1.0);
        assert_eq!(matrix.score('C', 'A').unwrap(), -1.0);
        assert_eq!(matrix.score('C', 'C').unwrap(), 2.0);
    }

    #[test]
    fn non_canonical_key_is_never_used() {
        let matrix = SubstitutionMatrix::from_string_entries([("ba", 1.0f32)]).unwrap();
        assert!(matches!(
            matrix.score('b', 'a'),
            Err(Error::MissingSubstitutionScore {
                first: 'a',
                second: 'b',
                sequence_index: None
            })
        ));
        assert!(matrix.score('a', 'b').is_err());
    }

    #[test]
    fn invalid_keys() {
        for key in ["", "a", "abc", "⋄⋄⋄"] {
            assert!(matches!(
                key.parse::<SubstitutionKey>(),
                Err(Error::InvalidSubstitutionKey(_))
            ));
        }
        assert_eq!(
            "‘“".parse::<SubstitutionKey>().unwrap(),
            SubstitutionKey::new('‘', '“')
        );
        assert!(matches!(
            SubstitutionMatrix::from_string_entries([("ab", 1.0f32), ("ab", 2.0)]),
            Err(Error::DuplicateSubstitutionKey(key)) if key == "ab"
        ));
    }

    #[test]
    fn uniform() {
        let matrix = SubstitutionMatrix::new_uniform("abca".chars(), 2.0f64, -1.0);
        assert_eq!(matrix.len(), 6);
        assert_eq!(matrix.score('a', 'a').unwrap(), 2.0);
        assert_eq!(matrix.score('c', 'a').unwrap(), -1.0);
        assert!(matrix.score('a', 'd').is_err());
        assert!(matrix.iter_sorted().all(|(key, _)| key.is_canonical()));
    }

    #[test]
    fn duplicate_insert_keeps_first_score() {
        let mut matrix = SubstitutionMatrix::from_string_entries([("ab", 1.0f32)]).unwrap();
        assert!(matches!(
            matrix.insert(SubstitutionKey::new('a', 'b'), 2.0),
            Err(Error::DuplicateSubstitutionKey(key)) if key == "ab"
        ));
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.score('b', 'a').unwrap(), 1.0);
    }
}
