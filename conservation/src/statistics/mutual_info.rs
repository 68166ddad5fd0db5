//! Mutual information between pairs of columns.
//!
//! MI(x,y) = (H(x) + H(y) - H(x,y)) / max_z H(z)
//! with H the weighted Shannon entropy (natural log) of a column
//! and H(x,y) the one of the symbol pairs of x and y.
use super::{column_probabilities, entropy};
use msa_profile::{henikoff_weights, Alignment, TriangularMatrix};
use rayon::prelude::*;

/// Only the cells `x < y` are filled; the rest is zero.
pub fn mutual_information(aln: &Alignment) -> TriangularMatrix<f64> {
    let ncol = aln.num_columns();
    let size = aln.alphabet().len();
    let weights = henikoff_weights(aln);
    let entropies: Vec<f64> = column_probabilities(aln, &weights)
        .iter()
        .map(|probs| entropy(probs))
        .collect();
    let normalizer = entropies.iter().fold(0f64, |x, &y| x.max(y));
    debug!("Max column entropy:{:.4}", normalizer);
    if normalizer <= 0. {
        return TriangularMatrix::new(ncol);
    }
    let encoded = aln.encoded();
    let columns: Vec<Vec<usize>> = (0..ncol)
        .map(|col| encoded.iter().map(|row| row[col]).collect())
        .collect();
    let rows: Vec<Vec<f64>> = (0..ncol)
        .into_par_iter()
        .map(|x| {
            let mut joint = vec![0.; size * size];
            ((x + 1)..ncol)
                .map(|y| {
                    joint.iter_mut().for_each(|p| *p = 0.);
                    for ((&a, &b), w) in columns[x].iter().zip(columns[y].iter()).zip(&weights) {
                        joint[a * size + b] += w;
                    }
                    (entropies[x] + entropies[y] - entropy(&joint)) / normalizer
                })
                .collect()
        })
        .collect();
    TriangularMatrix::from_upper_rows(ncol, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn identical_columns() {
        let aln = Alignment::from_sequences(&["AAG", "CCG", "DDG"]).unwrap();
        let mi = mutual_information(&aln);
        assert!((mi.get(0, 1) - 1.).abs() < 0.000_001);
        // A constant column shares nothing.
        assert!(mi.get(0, 2).abs() < 0.000_001);
        assert_eq!(mi.get(1, 1), 0.);
    }
    #[test]
    fn constant_alignment() {
        let aln = Alignment::from_sequences(&["AAA", "AAA"]).unwrap();
        let mi = mutual_information(&aln);
        assert!(mi.as_slice().iter().all(|&x| x == 0.));
    }
}
