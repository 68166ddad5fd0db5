//! Variability by Wu & Kabat (1970): V(x) = k / n1, where k is the number of
//! symbol types in column x and n1 the count of its most frequent symbol.
//! No sequence weighting.
use msa_profile::Alignment;

pub fn kabat(aln: &Alignment) -> Vec<f64> {
    let seqs = aln.sequences();
    aln.column_types()
        .iter()
        .enumerate()
        .map(|(col, types)| {
            let mut counts = [0usize; 256];
            for seq in seqs {
                counts[seq[col] as usize] += 1;
            }
            let n1 = counts.iter().copied().max().unwrap_or(0).max(1);
            types.len() as f64 / n1 as f64
        })
        .collect()
}
