//! Mean stereochemical vector of each column.
//!
//! Every residue a is the vector of its normalized scores against the matrix alphabet;
//! a column is summarized by the mean of the vectors of its residues.
use msa_profile::{is_gap, Alignment, Result, ScoringMatrix};

/// Residues outside the matrix alphabet are turned into gaps first (this mutates `aln`).
/// Returns one vector of `matrix.len()` means per column. An all-gap column gives zeros.
pub fn mean_vectors(aln: &mut Alignment, matrix: &ScoringMatrix) -> Result<Vec<Vec<f64>>> {
    let replaced = aln.restrict_to_alphabet(matrix.alphabet());
    if replaced > 0 {
        warn!(
            "{} residues are not in the score matrix and are treated as gaps.",
            replaced
        );
    }
    let size = matrix.len();
    let seqs = aln.sequences();
    (0..aln.num_columns())
        .map(|col| {
            let mut mean = vec![0.; size];
            let mut count = 0;
            for seq in seqs.iter().filter(|seq| !is_gap(seq[col])) {
                let idx = matrix.index(seq[col])?;
                for (a, m) in mean.iter_mut().enumerate() {
                    *m += matrix.norm_score_by_index(a, idx);
                }
                count += 1;
            }
            if count > 0 {
                mean.iter_mut().for_each(|m| *m /= count as f64);
            }
            Ok(mean)
        })
        .collect()
}
