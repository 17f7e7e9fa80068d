use std::fmt::Display;

use ndarray::Array2;
use num_traits::{Float, Zero};

use crate::{
    codec::CodepointSequence, config::AlignmentConfiguration, error::Result,
    progressive_aligner::Alignment,
};

/// The dynamic programming matrix for aligning a sequence against a profile with affine gaps.
///
/// Rows correspond to profile columns, columns to characters of the sequence.
/// Cells are addressed as `[profile_index, sequence_index]`, where row and column zero hold the leading gaps.
/// A matrix is only valid for a single fold-in round.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentMatrix<Score> {
    matrix: Array2<TraceCell<Score>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceCell<Score> {
    /// The best score of any alignment ending in this cell.
    pub val: Score,
    /// The best score of an alignment ending in this cell with a gap in the sequence.
    pub up: Score,
    /// The best score of an alignment ending in this cell with a gap in the profile.
    pub left: Score,
    pub direction: TraceDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceDirection {
    /// Marks the matrix origin at [0, 0].
    None,
    /// Profile column and sequence character are aligned.
    Diagonal,
    /// The profile column is aligned to a gap.
    Up,
    /// The sequence character is aligned to a gap.
    Left,
}

impl<Score: Float> AlignmentMatrix<Score> {
    pub fn new(profile_length: usize, sequence_length: usize) -> Self {
        Self {
            matrix: Array2::default((profile_length + 1, sequence_length + 1)),
        }
    }

    pub fn profile_length(&self) -> usize {
        self.matrix.nrows() - 1
    }

    pub fn sequence_length(&self) -> usize {
        self.matrix.ncols() - 1
    }

    fn final_index(&self) -> [usize; 2] {
        [self.profile_length(), self.sequence_length()]
    }

    /// Fill the matrix and return the score of the best alignment.
    ///
    /// Fails if the substitution matrix is missing a pair required to score a cell.
    pub fn align(
        &mut self,
        profile: &Alignment,
        sequence: &CodepointSequence,
        configuration: &AlignmentConfiguration<Score>,
    ) -> Result<Score> {
        debug_assert_eq!(self.profile_length(), profile.column_count());
        debug_assert_eq!(self.sequence_length(), sequence.len());

        self.initialise(configuration);
        self.align_inner(profile, sequence, configuration)?;
        Ok(self.matrix[self.final_index()].val)
    }

    fn initialise(&mut self, configuration: &AlignmentConfiguration<Score>) {
        self.matrix[[0, 0]] = TraceCell::default();

        // Edges are accumulated by repeated addition.
        let mut score = configuration.gap_score(true);
        for profile_index in 1..=self.profile_length() {
            self.matrix[[profile_index, 0]] = TraceCell::new_edge(score, TraceDirection::Up);
            score = score + configuration.gap_score(false);
        }

        let mut score = configuration.gap_score(true);
        for sequence_index in 1..=self.sequence_length() {
            self.matrix[[0, sequence_index]] = TraceCell::new_edge(score, TraceDirection::Left);
            score = score + configuration.gap_score(false);
        }
    }

    fn align_inner(
        &mut self,
        profile: &Alignment,
        sequence: &CodepointSequence,
        configuration: &AlignmentConfiguration<Score>,
    ) -> Result<()> {
        for profile_index in 1..=self.profile_length() {
            for sequence_index in 1..=self.sequence_length() {
                self.set_best_cell(
                    [profile_index, sequence_index],
                    profile,
                    sequence,
                    configuration,
                )?;
            }
        }
        Ok(())
    }

    fn set_best_cell(
        &mut self,
        index: [usize; 2],
        profile: &Alignment,
        sequence: &CodepointSequence,
        configuration: &AlignmentConfiguration<Score>,
    ) -> Result<()> {
        let [profile_index, sequence_index] = index;
        let up_predecessor = TraceDirection::Up.predecessor(index);
        let left_predecessor = TraceDirection::Left.predecessor(index);
        let up = self.compute_gap_score(up_predecessor, configuration, |cell| cell.up);
        let left = self.compute_gap_score(left_predecessor, configuration, |cell| cell.left);
        let diagonal = profile
            .best_substitution_score(
                profile_index - 1,
                sequence[sequence_index - 1],
                &configuration.substitution_matrix,
            )?
            .map(|score| score + self.matrix[TraceDirection::Diagonal.predecessor(index)].val);

        // Candidates are tested in order diagonal, up, left, and only a strictly better one replaces the current best.
        let (mut val, mut direction) = match diagonal {
            Some(diagonal) => (diagonal, TraceDirection::Diagonal),
            // Only reachable if every profile row is gapped in this column.
            None => (up, TraceDirection::Up),
        };
        if up > val {
            val = up;
            direction = TraceDirection::Up;
        }
        if left > val {
            val = left;
            direction = TraceDirection::Left;
        }

        self.matrix[index] = TraceCell {
            val,
            up,
            left,
            direction,
        };
        Ok(())
    }

    /// The best score of reaching a cell from `predecessor` with a gap, either opening a new one or extending one.
    fn compute_gap_score(
        &self,
        predecessor: [usize; 2],
        configuration: &AlignmentConfiguration<Score>,
        running_gap_score: impl FnOnce(&TraceCell<Score>) -> Score,
    ) -> Score {
        let predecessor = &self.matrix[predecessor];
        let extend = running_gap_score(predecessor) + configuration.gap_score(false);
        let open = predecessor.val + configuration.gap_score(true);
        extend.max(open)
    }

    /// Follow the trace directions from the final cell back to the origin.
    ///
    /// The directions are returned in alignment order, i.e. starting at the origin.
    pub fn traceback(&self) -> Vec<TraceDirection> {
        let mut index = self.final_index();
        let mut result = Vec::with_capacity(self.profile_length() + self.sequence_length());

        loop {
            let direction = self.matrix[index].direction;
            if direction == TraceDirection::None {
                break;
            }

            result.push(direction);
            index = direction.predecessor(index);
        }

        debug_assert_eq!(index, [0, 0]);
        result.reverse();
        result
    }

    /// Overwrite the inner cells in profile-major order.
    #[cfg(test)]
    fn manual_debug_fill(&mut self, entries: impl IntoIterator<Item = TraceCell<Score>>) {
        let mut entries = entries.into_iter();
        for profile_index in 1..=self.profile_length() {
            for sequence_index in 1..=self.sequence_length() {
                self.matrix[[profile_index, sequence_index]] = entries.next().unwrap();
            }
        }
        assert!(entries.next().is_none());
    }
}

impl TraceDirection {
    /// The cell that a trace step in this direction came from.
    ///
    /// Panics for [`TraceDirection::None`], which only marks the origin.
    pub fn predecessor(self, [profile_index, sequence_index]: [usize; 2]) -> [usize; 2] {
        match self {
            TraceDirection::None => panic!("Trace direction 'None' has no predecessor"),
            TraceDirection::Diagonal => [profile_index - 1, sequence_index - 1],
            TraceDirection::Up => [profile_index - 1, sequence_index],
            TraceDirection::Left => [profile_index, sequence_index - 1],
        }
    }

    fn symbol(self) -> char {
        match self {
            TraceDirection::None => 'N',
            TraceDirection::Diagonal => 'D',
            TraceDirection::Up => 'U',
            TraceDirection::Left => 'L',
        }
    }
}

impl<Score> TraceCell<Score> {
    fn new_edge(score: Score, direction: TraceDirection) -> Self
    where
        Score: Copy,
    {
        Self {
            val: score,
            up: score,
            left: score,
            direction,
        }
    }
}

impl<Score: Zero> Default for TraceCell<Score> {
    fn default() -> Self {
        Self {
            val: Score::zero(),
            up: Score::zero(),
            left: Score::zero(),
            direction: TraceDirection::None,
        }
    }
}

/// One line per profile position, each cell printed as its value followed by its trace direction.
impl<Score: Display> Display for AlignmentMatrix<Score> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vals = self.matrix.map(|cell| cell.val.to_string());
        let widths: Vec<_> = vals
            .columns()
            .into_iter()
            .map(|column| column.iter().map(|val| val.chars().count()).max().unwrap_or(0))
            .collect();

        for (vals, cells) in vals.rows().into_iter().zip(self.matrix.rows()) {
            write!(f, "[ ")?;
            for ((val, cell), &width) in vals.iter().zip(&cells).zip(&widths) {
                write!(f, "{val: >width$}{} ", cell.direction.symbol())?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
