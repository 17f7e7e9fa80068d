//! Progressive multiple alignment of short text fragments.
//!
//! Sequences are folded one at a time into a growing alignment.
//! Each new sequence is aligned with affine gaps against the column profile of the current alignment,
//! where a column scores a character by the best substitution score over all of its non-gap characters.
//! This is a heuristic, the resulting multiple alignment is not guaranteed to be optimal.

use std::fmt::Display;

use log::{debug, trace};
use num_traits::Float;

use crate::{
    alignment_matrix::{AlignmentMatrix, TraceDirection},
    codec::{CodepointSequence, GAP_MARKER},
    config::AlignmentConfiguration,
    error::{Error, Result},
    substitution_matrix::SubstitutionMatrix,
};


/// A set of rows of equal length, where gaps are marked with [`GAP_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    rows: Vec<CodepointSequence>,
}

/// Builds an alignment by folding in one sequence after the other.
pub struct ProgressiveAligner<'configuration, Score> {
    configuration: &'configuration AlignmentConfiguration<Score>,
    alignment: Option<Alignment>,
    sequence_count: usize,
}

impl Alignment {
    /// An alignment consisting of just the given sequence, without any gaps.
    pub fn new(first_row: CodepointSequence) -> Self {
        Self {
            rows: vec![first_row],
        }
    }

    pub fn rows(&self) -> &[CodepointSequence] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<CodepointSequence> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// The best substitution score of `character` against any non-gap character in the given column.
    ///
    /// Returns `None` if all rows are gapped in this column.
    pub fn best_substitution_score<Score: Float>(
        &self,
        column: usize,
        character: char,
        substitution_matrix: &SubstitutionMatrix<Score>,
    ) -> Result<Option<Score>> {
        let mut best = None;

        for row in &self.rows {
            let row_character = row[column];
            if row_character == GAP_MARKER {
                continue;
            }

            let score = substitution_matrix.score(row_character, character)?;
            if best.is_none_or(|best| score > best) {
                best = Some(score);
            }
        }

        Ok(best)
    }

    /// Build the alignment that results from adding `sequence` along the given trace.
    ///
    /// All existing rows are rebuilt, the sequence becomes the last row.
    fn extend(&self, sequence: &CodepointSequence, trace: &[TraceDirection]) -> Self {
        let mut existing_rows: Vec<Vec<char>> = self
            .rows
            .iter()
            .map(|_| Vec::with_capacity(trace.len()))
            .collect();
        let mut new_row = Vec::with_capacity(trace.len());
        let mut profile_index = 0;
        let mut sequence_index = 0;

        for &direction in trace {
            match direction {
                TraceDirection::None => unreachable!("the origin is not part of the trace"),
                TraceDirection::Diagonal => {
                    for (row, existing_row) in existing_rows.iter_mut().zip(&self.rows) {
                        row.push(existing_row[profile_index]);
                    }
                    new_row.push(sequence[sequence_index]);
                    profile_index += 1;
                    sequence_index += 1;
                }
                TraceDirection::Up => {
                    for (row, existing_row) in existing_rows.iter_mut().zip(&self.rows) {
                        row.push(existing_row[profile_index]);
                    }
                    new_row.push(GAP_MARKER);
                    profile_index += 1;
                }
                TraceDirection::Left => {
                    for row in existing_rows.iter_mut() {
                        row.push(GAP_MARKER);
                    }
                    new_row.push(sequence[sequence_index]);
                    sequence_index += 1;
                }
            }
        }

        debug_assert_eq!(profile_index, self.column_count());
        debug_assert_eq!(sequence_index, sequence.len());

        existing_rows.push(new_row);
        Self {
            rows: existing_rows
                .into_iter()
                .map(CodepointSequence::from)
                .collect(),
        }
    }
}

impl<'configuration, Score: Float + Display> ProgressiveAligner<'configuration, Score> {
    pub fn new(configuration: &'configuration AlignmentConfiguration<Score>) -> Self {
        Self {
            configuration,
            alignment: None,
            sequence_count: 0,
        }
    }

    /// The current alignment, or `None` if no sequence was added yet.
    pub fn alignment(&self) -> Option<&Alignment> {
        self.alignment.as_ref()
    }

    /// Fold a sequence into the alignment.
    ///
    /// The first sequence is taken as is. Every later sequence is aligned against the current alignment,
    /// which is then replaced by a new alignment with gaps inserted into the old rows and the new sequence.
    /// On error, the current alignment stays unchanged.
    pub fn add_sequence(&mut self, sequence: CodepointSequence) -> Result<()> {
        let sequence_index = self.sequence_count;

        let Some(alignment) = &self.alignment else {
            debug!("Starting alignment with sequence of length {}", sequence.len());
            self.alignment = Some(Alignment::new(sequence));
            self.sequence_count += 1;
            return Ok(());
        };

        let mut matrix = AlignmentMatrix::new(alignment.column_count(), sequence.len());
        let score = matrix
            .align(alignment, &sequence, self.configuration)
            .map_err(|error| match error {
                Error::MissingSubstitutionScore { first, second, .. } => {
                    Error::MissingSubstitutionScore {
                        first,
                        second,
                        sequence_index: Some(sequence_index),
                    }
                }
                error => error,
            })?;
        trace!("Trace matrix of sequence {sequence_index}:\n{matrix}");

        let trace = matrix.traceback();
        let alignment = alignment.extend(&sequence, &trace);
        debug!(
            "Folded in sequence {sequence_index} with score {score}, alignment now has {} columns",
            alignment.column_count()
        );

        self.alignment = Some(alignment);
        self.sequence_count += 1;
        Ok(())
    }

    pub fn into_alignment(self) -> Option<Alignment> {
        self.alignment
    }
}

/// Align all sequences progressively, in input order.
///
/// Fails if `strings` is empty, or if the substitution matrix lacks a score required during alignment.
/// In the latter case, no partial alignment is returned.
pub fn align_all<Score: Float + Display>(
    strings: impl IntoIterator<Item = CodepointSequence>,
    configuration: &AlignmentConfiguration<Score>,
) -> Result<Alignment> {
    let mut aligner = ProgressiveAligner::new(configuration);
    for sequence in strings {
        aligner.add_sequence(sequence)?;
    }

    aligner
        .into_alignment()
        .ok_or_else(|| Error::InvalidArgument("at least one string is required".to_string()))
}

impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
