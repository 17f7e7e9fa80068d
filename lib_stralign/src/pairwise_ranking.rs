use itertools::Itertools;
use log::debug;

use crate::{codec::CodepointSequence, edit_distance::distance};

/// The edit distance of a pair of input sequences, identified by their indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairDistance {
    pub distance: usize,
    pub first_index: usize,
    pub second_index: usize,
}

/// Compute the edit distance of every unordered pair of sequences.
///
/// Pairs `(i, j)` with `i < j` are enumerated with `i` as the outer loop.
/// The result is sorted ascending by distance, and pairs with equal distance keep their enumeration order.
/// Less than two sequences yield an empty result.
pub fn rank_all(strings: &[CodepointSequence]) -> Vec<PairDistance> {
    let mut result: Vec<_> = (0..strings.len())
        .tuple_combinations()
        .map(|(first_index, second_index)| PairDistance {
            distance: distance(&strings[first_index], &strings[second_index]),
            first_index,
            second_index,
        })
        .collect();

    // `sort_by_key` is stable.
    result.sort_by_key(|pair| pair.distance);
    debug!(
        "Ranked {} pairs of {} sequences",
        result.len(),
        strings.len()
    );

    result
}

impl From<PairDistance> for (usize, usize, usize) {
    fn from(pair: PairDistance) -> Self {
        (pair.distance, pair.first_index, pair.second_index)
    }
}

impl std::fmt::Display for PairDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.distance, self.first_index, self.second_index
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::CodepointSequence;

    use super::rank_all;

    fn rank(strings: &[&str]) -> Vec<(usize, usize, usize)> {
        let strings: Vec<_> = strings.iter().copied().map(CodepointSequence::from).collect();
        rank_all(&strings).into_iter().map(Into::into).collect()
    }

    #[test]
    fn trivial_inputs() {
        assert_eq!(rank(&[]), vec![]);
        assert_eq!(rank(&["abc"]), vec![]);
        assert_eq!(rank(&["aa", "bb"]), vec![(2, 0, 1)]);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        assert_eq!(
            rank(&["aa", "bb", "ab"]),
            vec![(1, 0, 2), (1, 1, 2), (2, 0, 1)]
        );
        assert_eq!(
            rank(&["x", "y", "z", "w"]),
            vec![
                (1, 0, 1),
                (1, 0, 2),
                (1, 0, 3),
                (1, 1, 2),
                (1, 1, 3),
                (1, 2, 3)
            ]
        );
    }

    #[test]
    fn label_lines() {
        let ranking = rank(&[
            "MOJAVE DESERT, PROVIDENCE MTS.: canyon above",
            "E. MOJAVE DESERT , PROVIDENCE MTS . : canyon above",
            "E MOJAVE DESERT PROVTDENCE MTS. # canyon above",
            "Be ‘MOJAVE DESERT, PROVIDENCE canyon “above",
        ]);
        assert_eq!(
            ranking,
            vec![
                (6, 0, 1),
                (6, 0, 2),
                (6, 1, 2),
                (11, 0, 3),
                (13, 1, 3),
                (13, 2, 3)
            ]
        );
    }

    #[test]
    fn result_size_and_order() {
        let ranking = rank(&["kitten", "sitting", "mitten", "bitten", "sitter"]);
        assert_eq!(ranking.len(), 5 * 4 / 2);
        assert!(ranking.windows(2).all(|pair| pair[0].0 <= pair[1].0));
        for window in ranking.windows(2) {
            if window[0].0 == window[1].0 {
                assert!((window[0].1, window[0].2) < (window[1].1, window[1].2));
            }
        }
    }
}
