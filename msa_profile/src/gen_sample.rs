//! Random alignments and matrices, for tests and benchmarks.
use rand::seq::SliceRandom;
use rand::Rng;

pub const AMINO_ACIDS: &[u8] = b"ARNDCQEGHILKMFPSTWYV";

pub struct Profile {
    pub sub: f64,
    pub gap: f64,
}
pub const PROFILE: Profile = Profile {
    sub: 0.1,
    gap: 0.05,
};

#[derive(Debug, Clone, Copy)]
enum Op {
    Match,
    MisMatch,
    Gap,
}
impl Op {
    fn weight(self, p: &Profile) -> f64 {
        match self {
            Op::Match => 1. - p.sub - p.gap,
            Op::MisMatch => p.sub,
            Op::Gap => p.gap,
        }
    }
}
const OPERATIONS: [Op; 3] = [Op::Match, Op::MisMatch, Op::Gap];

pub fn generate_seq<T: Rng>(rng: &mut T, len: usize, alphabet: &[u8]) -> Vec<u8> {
    (0..len)
        .filter_map(|_| alphabet.choose(rng))
        .copied()
        .collect()
}

/// Substitute or blank out residues of `seq`. The length is kept, so rows stay aligned.
pub fn introduce_randomness<T: Rng>(
    seq: &[u8],
    rng: &mut T,
    p: &Profile,
    alphabet: &[u8],
) -> Vec<u8> {
    seq.iter()
        .map(|&base| match OPERATIONS.choose_weighted(rng, |e| e.weight(p)) {
            Ok(Op::MisMatch) => choose_residue(rng, base, alphabet),
            Ok(Op::Gap) => crate::GAP,
            _ => base,
        })
        .collect()
}

/// `nseq` rows of length `len`, all mutated from one random template.
pub fn random_alignment<T: Rng>(
    rng: &mut T,
    nseq: usize,
    len: usize,
    alphabet: &[u8],
    p: &Profile,
) -> Vec<Vec<u8>> {
    let template = generate_seq(rng, len, alphabet);
    (0..nseq)
        .map(|_| introduce_randomness(&template, rng, p, alphabet))
        .collect()
}

/// A random symmetric matrix over `alphabet`, in AAindex format.
/// Scores are integers in [-range, range], diagonal entries are non-negative.
pub fn random_matrix<T: Rng>(rng: &mut T, alphabet: &[u8], range: i32) -> String {
    let rows: Vec<Vec<f64>> = (0..alphabet.len())
        .map(|i| {
            (0..=i)
                .map(|j| {
                    let lower = if i == j { 0 } else { -range };
                    rng.gen_range(lower..=range) as f64
                })
                .collect()
        })
        .collect();
    to_aaindex(alphabet, &rows)
}

/// Write a lower triangle (`rows[i]` holds i + 1 values) in AAindex format.
pub fn to_aaindex(alphabet: &[u8], rows: &[Vec<f64>]) -> String {
    let alphabet = String::from_utf8_lossy(alphabet);
    let mut result = String::new();
    result.push_str("H RANDOM\nD Random matrix\n");
    result.push_str(&format!("M rows = {}, cols = {}\n", alphabet, alphabet));
    for row in rows {
        for value in row {
            result.push_str(&format!("{:>8.1}", value));
        }
        result.push('\n');
    }
    result.push_str("//\n");
    result
}

fn choose_residue<T: Rng>(rng: &mut T, base: u8, alphabet: &[u8]) -> u8 {
    let others: Vec<u8> = alphabet.iter().filter(|&&e| e != base).copied().collect();
    others.choose(rng).copied().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    #[test]
    fn alignment_shape() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(10);
        let rows = random_alignment(&mut rng, 12, 40, AMINO_ACIDS, &PROFILE);
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r.len() == 40));
        assert!(rows
            .iter()
            .flatten()
            .all(|&x| x == crate::GAP || AMINO_ACIDS.contains(&x)));
    }
    #[test]
    fn matrix_is_readable() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(2);
        let text = random_matrix(&mut rng, b"ACGT", 5);
        let m = crate::ScoringMatrix::from_reader(text.as_bytes()).unwrap();
        assert_eq!(m.alphabet(), b"ACGT");
        assert!(m.min() >= -5. && m.max() <= 5.);
    }
}
