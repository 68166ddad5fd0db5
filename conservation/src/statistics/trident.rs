//! The trident score by Valdar (2002):
//! S(x) = (1 - t(x))^a * (1 - r(x))^b * (1 - g(x))^c
//! t: weighted entropy, r: stereochemical variability, g: gap fraction.
use super::{check_alphabet, wentropy};
use msa_profile::{henikoff_weights, is_gap, Alignment, Result, ScoringMatrix};

pub fn trident(
    aln: &Alignment,
    matrix: &ScoringMatrix,
    (a, b, c): (f64, f64, f64),
) -> Result<Vec<f64>> {
    check_alphabet(aln, matrix)?;
    let weights = henikoff_weights(aln);
    let t = wentropy::weighted_entropy(aln, &weights);
    let r = stereochemical_variability(aln, matrix)?;
    let g = aln.gap_fractions();
    let scores: Vec<f64> = t
        .iter()
        .zip(r.iter())
        .zip(g.iter())
        .map(|((&t, &r), &g)| term(t, a) * term(r, b) * term(g, c))
        .collect();
    debug!("Trident conservation score:{:?}", scores);
    Ok(scores)
}

// Rounding may push a term slightly above one; a negative base would make powf NaN.
fn term(x: f64, exponent: f64) -> f64 {
    (1. - x).max(0.).powf(exponent)
}

/// r(x) = lambda * 1/k * sum_a |mean(x) - X_a|, over the k non-gap symbol types of x,
/// where X_a is the row of the normalized matrix for a and
/// lambda = 1 / sqrt(K * (max - min)^2) with K the size of the matrix alphabet.
/// A column without any residue is fully variable (r = 1).
pub fn stereochemical_variability(aln: &Alignment, matrix: &ScoringMatrix) -> Result<Vec<f64>> {
    let size = matrix.len();
    let range = matrix.max() - matrix.min();
    let lambda = (size as f64 * range * range).sqrt();
    aln.column_types()
        .iter()
        .map(|types| {
            let residues = types
                .iter()
                .filter(|&&s| !is_gap(s))
                .map(|&s| matrix.index(s))
                .collect::<Result<Vec<usize>>>()?;
            if residues.is_empty() {
                return Ok(1.);
            }
            let vectors: Vec<Vec<f64>> = residues
                .iter()
                .map(|&i| (0..size).map(|a| matrix.norm_score_by_index(a, i)).collect())
                .collect();
            let k = vectors.len() as f64;
            let mean: Vec<f64> = (0..size)
                .map(|a| vectors.iter().map(|v| v[a]).sum::<f64>() / k)
                .collect();
            let distance: f64 = vectors
                .iter()
                .map(|v| {
                    v.iter()
                        .zip(mean.iter())
                        .map(|(x, m)| (m - x).powi(2))
                        .sum::<f64>()
                        .sqrt()
                })
                .sum();
            Ok(distance / k / lambda)
        })
        .collect()
}
