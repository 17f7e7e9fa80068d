/// Compute the unit-cost Levenshtein distance of two sequences.
///
/// Insertions, deletions and substitutions each cost one.
/// Uses a single row of length `b.len() + 1` that is updated while sweeping over `a`.
pub fn distance<Character: PartialEq>(a: &[Character], b: &[Character]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (a_index, a_character) in a.iter().enumerate() {
        // The value of the cell diagonally above-left of the current one.
        let mut diagonal = a_index;
        row[0] = a_index + 1;

        for (b_index, b_character) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(a_character != b_character);
            let deletion = row[b_index + 1] + 1;
            let insertion = row[b_index] + 1;

            diagonal = row[b_index + 1];
            row[b_index + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use crate::codec::CodepointSequence;

    use super::distance;

    fn d(a: &str, b: &str) -> usize {
        distance(&CodepointSequence::from(a), &CodepointSequence::from(b))
    }

    #[test]
    fn empty() {
        assert_eq!(d("", ""), 0);
        assert_eq!(d("", "abc"), 3);
        assert_eq!(d("abcd", ""), 4);
    }

    #[test]
    fn identity_and_symmetry() {
        for (a, b) in [
            ("kitten", "sitting"),
            ("aa", "bb"),
            ("MOJAVE DESERT", "E. MOJAVE DESERT ,"),
            ("‘above", "“above"),
        ] {
            assert_eq!(d(a, a), 0);
            assert_eq!(d(b, b), 0);
            assert_eq!(d(a, b), d(b, a));
        }
    }

    #[test]
    fn simple_distances() {
        assert_eq!(d("abc", "xyz"), 3);
        assert_eq!(d("kitten", "sitting"), 3);
        assert_eq!(d("aa", "ab"), 1);
        assert_eq!(d("flaw", "lawn"), 2);
        assert_eq!(d("ab", "ba"), 2);
        assert_eq!(d("aab", "b"), 2);
        assert_eq!(d("xxab", "ab"), 2);
    }

    #[test]
    fn codepoints_not_bytes() {
        // Both strings differ in a single multi-byte character.
        assert_eq!(d("canyon “above", "canyon ‘above"), 1);
        assert_eq!(d("⋄", "a"), 1);
    }
}
