use crate::substitution_matrix::SubstitutionMatrix;

pub mod io;

/// Scores used by the progressive aligner.
///
/// Gap scores are usually negative, but any real values are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentConfiguration<Score> {
    pub gap_open: Score,
    pub gap_extend: Score,
    pub substitution_matrix: SubstitutionMatrix<Score>,
}

impl<Score: Copy> AlignmentConfiguration<Score> {
    pub fn new(
        substitution_matrix: SubstitutionMatrix<Score>,
        gap_open: Score,
        gap_extend: Score,
    ) -> Self {
        Self {
            gap_open,
            gap_extend,
            substitution_matrix,
        }
    }

    /// The score of a gap, depending on whether it opens a new gap or extends an existing one.
    pub fn gap_score(&self, is_first: bool) -> Score {
        if is_first {
            self.gap_open
        } else {
            self.gap_extend
        }
    }
}
