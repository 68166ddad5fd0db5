use msa_profile::Alignment;

/// g(x) = (number of gaps in x) / N.
pub fn gap(aln: &Alignment) -> Vec<f64> {
    aln.gap_fractions()
}
