//! This is a library to hold a multiple sequence alignment
//! together with the per-column tables every conservation statistic reads:
//! alphabet, gap counts, symbol types, global frequencies, and entropies.
//! It also loads AAindex-style substitution matrices and computes
//! Henikoff & Henikoff sequence weights.
#[macro_use]
extern crate log;
extern crate rand;
extern crate rayon;
#[macro_use]
extern crate serde;
extern crate thiserror;
pub mod alignment;
pub mod error;
pub mod fasta;
pub mod gen_sample;
pub mod scoring_matrix;
pub mod triangular;
pub mod weights;
pub use alignment::Alignment;
pub use error::{Error, Result};
pub use scoring_matrix::ScoringMatrix;
pub use triangular::TriangularMatrix;
pub use weights::henikoff_weights;

/// The symbol written in place of residues removed from an alignment.
pub const GAP: u8 = b'-';

/// Both '-' and ' ' are treated as gaps.
#[inline]
pub fn is_gap(symbol: u8) -> bool {
    symbol == b'-' || symbol == b' '
}
