pub mod alignment_matrix;
pub mod codec;
pub mod config;
pub mod edit_distance;
pub mod error;
mod io;
pub mod pairwise_ranking;
pub mod progressive_aligner;
pub mod substitution_matrix;
