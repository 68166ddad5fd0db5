//! Sequence weights by Henikoff & Henikoff (1994).
//!
//! w_i = 1/L * sum_x 1 / (k_x * n_{x,i})
//! where k_x is the number of symbol types in column x and
//! n_{x,i} is the number of rows sharing the symbol of row i in column x.
//! The weights of an alignment sum up to one.
use crate::alignment::Alignment;
use rayon::prelude::*;

/// Compute one weight per row. The per-column symbol counts are tabulated first,
/// so the cost is O(N * L) and the result is equal to the pairwise definition.
pub fn henikoff_weights(aln: &Alignment) -> Vec<f64> {
    let ncol = aln.num_columns();
    let seqs = aln.sequences();
    let types = aln.column_types();
    let counts: Vec<[u32; 256]> = (0..ncol)
        .map(|col| {
            let mut count = [0u32; 256];
            for seq in seqs {
                count[seq[col] as usize] += 1;
            }
            count
        })
        .collect();
    let weights: Vec<f64> = seqs
        .par_iter()
        .map(|seq| {
            let mut w = 0.;
            for x in 0..ncol {
                let n = counts[x][seq[x] as usize] as usize;
                let k = types[x].len();
                w += 1. / (n * k) as f64;
            }
            w / ncol as f64
        })
        .collect();
    debug!("Seq weights:{:?}", weights);
    weights
}

#[cfg(test)]
pub(crate) fn henikoff_weights_naive(aln: &Alignment) -> Vec<f64> {
    let ncol = aln.num_columns();
    let nseq = aln.num_sequences();
    (0..nseq)
        .map(|i| {
            let mut w = 0.;
            for x in 0..ncol {
                let k = aln.type_count(x).unwrap();
                let target = aln.symbol(i, x).unwrap();
                let n = (0..nseq)
                    .filter(|&j| aln.symbol(j, x).unwrap() == target)
                    .count();
                w += 1. / (n * k) as f64;
            }
            w / ncol as f64
        })
        .collect()
}
