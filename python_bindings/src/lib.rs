use lib_stralign::{
    codec::{CodepointSequence, encode},
    config::AlignmentConfiguration,
    edit_distance::distance,
    pairwise_ranking::rank_all,
    progressive_aligner,
    substitution_matrix::SubstitutionMatrix,
};
use pyo3::{exceptions::PyValueError, prelude::*};
use rustc_hash::FxHashMap;

fn to_py_error(error: lib_stralign::error::Error) -> PyErr {
    PyValueError::new_err(error.to_string())
}

/// Compute the Levenshtein distance between two strings.
///
/// Distances are counted in unicode codepoints.
#[pyfunction]
fn levenshtein(str1: &str, str2: &str) -> usize {
    distance(
        &CodepointSequence::from(str1),
        &CodepointSequence::from(str2),
    )
}

/// Compute the Levenshtein distance between all pairs of strings.
///
/// Returns a list of `(distance, index1, index2)` tuples with `index1 < index2`, sorted by distance.
/// Pairs with equal distance stay in enumeration order.
#[pyfunction]
fn levenshtein_all(strings: Vec<String>) -> Vec<(usize, usize, usize)> {
    let strings: Vec<_> = strings
        .iter()
        .map(|string| CodepointSequence::from(string.as_str()))
        .collect();
    rank_all(&strings).into_iter().map(Into::into).collect()
}

/// Progressively align a list of strings.
///
/// `weight` is the substitution matrix, mapping two-character keys to scores.
/// Keys are looked up with the smaller character first, so `"ab"` is used for both `a` against `b` and `b` against `a`.
/// `gap` is the score for opening a gap and `skew` the score for extending it.
/// Gaps are marked with `⋄` in the returned strings.
#[pyfunction]
fn align_all(
    strings: Vec<String>,
    weight: FxHashMap<String, f32>,
    gap: f32,
    skew: f32,
) -> PyResult<Vec<String>> {
    let substitution_matrix = SubstitutionMatrix::from_string_entries(weight).map_err(to_py_error)?;
    let configuration = AlignmentConfiguration::new(substitution_matrix, gap, skew);

    let alignment = progressive_aligner::align_all(
        strings
            .iter()
            .map(|string| CodepointSequence::from(string.as_str())),
        &configuration,
    )
    .map_err(to_py_error)?;

    Ok(alignment.rows().iter().map(encode).collect())
}

/// Bindings for the `lib_stralign` library.
#[pymodule]
fn string_align(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();
    m.add_function(wrap_pyfunction!(levenshtein, m)?)?;
    m.add_function(wrap_pyfunction!(levenshtein_all, m)?)?;
    m.add_function(wrap_pyfunction!(align_all, m)?)?;
    Ok(())
}
