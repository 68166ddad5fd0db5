//! Jensen-Shannon divergence between each column and the background distribution,
//! as proposed by Capra & Singh (2007).
//!
//! S(x) = 1/2 * KL(p || m) + 1/2 * KL(q || m), m = (p + q) / 2,
//! where p is the weighted symbol distribution of x and q the symbol frequencies of the whole alignment.
//! Each score is then averaged with the mean of its side columns,
//! and multiplied by (1 - g(x)).
use super::column_probabilities;
use msa_profile::{henikoff_weights, Alignment};

/// The probability given to absent symbols.
pub const PSEUDO_COUNT: f64 = 0.000_001;

pub fn jensen(aln: &Alignment, window: usize) -> Vec<f64> {
    let weights = henikoff_weights(aln);
    let background = aln.frequencies();
    let divergences: Vec<f64> = column_probabilities(aln, &weights)
        .into_iter()
        .map(|mut probs| {
            add_pseudo_counts(&mut probs);
            divergence(&probs, background)
        })
        .collect();
    trace!("JS divergence:{:?}", divergences);
    side_smoothing(&divergences, window)
        .into_iter()
        .zip(aln.gap_fractions())
        .map(|(s, g)| s * (1. - g))
        .collect()
}

/// Give PSEUDO_COUNT to every zero entry, and take the same mass back
/// evenly from the other entries. The total is unchanged.
pub fn add_pseudo_counts(probs: &mut [f64]) {
    let absent = probs.iter().filter(|&&p| p == 0.).count();
    if absent == 0 || absent == probs.len() {
        return;
    }
    let correction = absent as f64 * PSEUDO_COUNT / (probs.len() - absent) as f64;
    for p in probs.iter_mut() {
        if *p == 0. {
            *p = PSEUDO_COUNT;
        } else {
            *p -= correction;
        }
    }
}

/// Symmetrized Kullback-Leibler divergence to the midpoint distribution.
pub fn divergence(p: &[f64], q: &[f64]) -> f64 {
    let (mut left, mut right) = (0., 0.);
    for (&p, &q) in p.iter().zip(q.iter()) {
        let m = 0.5 * p + 0.5 * q;
        if p > 0. {
            left += p * (p / m).ln();
        }
        if q > 0. {
            right += q * (q / m).ln();
        }
    }
    0.5 * (left + right)
}

/// s'(x) = (s(x) + sum of s over the `window` columns on each side / (2 * window)) / 2.
/// Near the ends the missing columns count as zero. `window == 0` leaves the scores as is.
pub fn side_smoothing(scores: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return scores.to_vec();
    }
    let len = scores.len();
    (0..len)
        .map(|x| {
            let left = &scores[x.saturating_sub(window)..x];
            let right = &scores[(x + 1).min(len)..(x + 1 + window).min(len)];
            let side = left.iter().chain(right.iter()).sum::<f64>() / (2 * window) as f64;
            0.5 * (scores[x] + side)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn pseudo_counts_keep_mass() {
        let mut probs = vec![0.5, 0., 0.3, 0., 0.2];
        add_pseudo_counts(&mut probs);
        assert!((probs.iter().sum::<f64>() - 1.).abs() < 0.000_000_1);
        assert_eq!(probs[1], PSEUDO_COUNT);
        assert!((probs[0] - (0.5 - 2. * PSEUDO_COUNT / 3.)).abs() < 0.000_000_1);
    }
    #[test]
    fn divergence_to_itself() {
        let p = [0.2, 0.3, 0.5];
        assert!(divergence(&p, &p).abs() < 0.000_000_1);
        let q = [0.5, 0.3, 0.2];
        assert!(divergence(&p, &q) > 0.);
        assert!((divergence(&p, &q) - divergence(&q, &p)).abs() < 0.000_000_1);
    }
    #[test]
    fn smoothing_edges() {
        let scores = [1., 2., 3., 4.];
        let smoothed = side_smoothing(&scores, 1);
        assert_eq!(smoothed, vec![1., 2., 3., 2.75]);
        assert_eq!(side_smoothing(&scores, 0), scores.to_vec());
        assert_eq!(side_smoothing(&[2.], 2), vec![1.]);
        let scores = [1., 2., 3., 4., 5., 6., 7., 8.];
        let smoothed = side_smoothing(&scores, 3);
        // 0.5 * (1 + (2 + 3 + 4) / 6)
        assert_eq!(smoothed[0], 1.25);
        // 0.5 * (4 + (1 + 2 + 3 + 5 + 6 + 7) / 6)
        assert_eq!(smoothed[3], 4.);
        assert!((smoothed[7] - 0.5 * (8. + 18. / 6.)).abs() < 0.000_000_1);
    }
    #[test]
    fn background_column() {
        // Every column has the background distribution.
        let aln = Alignment::from_sequences(&["AC", "CA"]).unwrap();
        assert!(jensen(&aln, 1).iter().all(|s| s.abs() < 0.000_001));
    }
}
