//! Weighted Shannon entropy.
//!
//! p_a = sum of the weights of the rows with symbol a,
//! t(x) = -1/ln(min(K,N)) * sum p_a ln(p_a),
//! and the reported conservation is (1 - t(x)) * (1 - g(x)), g(x) being the gap fraction.
use super::{column_probabilities, entropy};
use msa_profile::{henikoff_weights, Alignment};

pub fn conservation(aln: &Alignment) -> Vec<f64> {
    let weights = henikoff_weights(aln);
    let entropies = weighted_entropy(aln, &weights);
    entropies
        .iter()
        .zip(aln.gap_fractions())
        .map(|(t, g)| (1. - t) * (1. - g))
        .collect()
}

/// t(x) for each column. Zero when min(K,N) < 2, as the entropy is necessarily zero.
pub fn weighted_entropy(aln: &Alignment, weights: &[f64]) -> Vec<f64> {
    let bound = aln.alphabet().len().min(aln.num_sequences());
    if bound < 2 {
        return vec![0.; aln.num_columns()];
    }
    let lambda = 1. / (bound as f64).ln();
    let entropies: Vec<f64> = column_probabilities(aln, weights)
        .iter()
        .map(|probs| entropy(probs) * lambda)
        .collect();
    trace!("Weighted entropy:{:?}", entropies);
    entropies
}
