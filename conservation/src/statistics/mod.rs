//! The statistics, and the dispatch from a [`StatisticKind`] to its implementation.
//!
//! Statistics that need a substitution matrix load it from [`Config::score_matrix`].
//! Only the mean vector statistic mutates the alignment.
use crate::config::{Config, StatisticKind};
use crate::error::Result;
use crate::result::ScoreResult;
use msa_profile::{Alignment, Error, ScoringMatrix};
pub mod gap;
pub mod jensen;
pub mod kabat;
pub mod mlc;
pub mod mutual_info;
pub mod mvector;
pub mod trident;
pub mod wentropy;

pub fn calculate(kind: StatisticKind, aln: &mut Alignment, config: &Config) -> Result<ScoreResult> {
    info!("Calculate {} on {}", kind, aln);
    let result = match kind {
        StatisticKind::WeightedEntropy => ScoreResult::Columns(wentropy::conservation(aln)),
        StatisticKind::Trident => {
            let matrix = load_matrix(config)?;
            let scores = trident::trident(aln, &matrix, config.trident_factors)?;
            ScoreResult::Columns(scores)
        }
        StatisticKind::MutualInformation => {
            ScoreResult::ColumnPairs(mutual_info::mutual_information(aln))
        }
        StatisticKind::Kabat => ScoreResult::Columns(kabat::kabat(aln)),
        StatisticKind::Jensen => ScoreResult::Columns(jensen::jensen(aln, config.window)),
        StatisticKind::MeanVector => {
            let matrix = load_matrix(config)?;
            let means = mvector::mean_vectors(aln, &matrix)?;
            let alphabet = String::from_utf8_lossy(matrix.alphabet()).to_string();
            ScoreResult::Profiles { alphabet, means }
        }
        StatisticKind::Mlc => {
            let matrix = load_matrix(config)?;
            let pairs = mlc::mlc(aln, &matrix, config.threshold)?;
            ScoreResult::Correlations {
                threshold: config.threshold,
                pairs,
            }
        }
        StatisticKind::Gap => ScoreResult::Columns(gap::gap(aln)),
    };
    Ok(result)
}

fn load_matrix(config: &Config) -> Result<ScoringMatrix> {
    let path = config.score_matrix()?;
    Ok(ScoringMatrix::from_file(path)?)
}

/// Fails unless every residue of the alignment has a row in the matrix.
pub(crate) fn check_alphabet(aln: &Alignment, matrix: &ScoringMatrix) -> msa_profile::Result<()> {
    if aln.is_alphabet_subset_of(matrix.alphabet()) {
        Ok(())
    } else {
        Err(Error::AlphabetMismatch {
            alignment: String::from_utf8_lossy(aln.alphabet()).to_string(),
            matrix: String::from_utf8_lossy(matrix.alphabet()).to_string(),
        })
    }
}

/// p[col][a] = sum of the weights of the rows having the a-th symbol of the alphabet at col.
/// Every column sums up to the total weight.
pub fn column_probabilities(aln: &Alignment, weights: &[f64]) -> Vec<Vec<f64>> {
    let size = aln.alphabet().len();
    let encoded = aln.encoded();
    (0..aln.num_columns())
        .map(|col| {
            let mut probs = vec![0.; size];
            for (row, w) in encoded.iter().zip(weights) {
                probs[row[col]] += w;
            }
            probs
        })
        .collect()
}

/// -sum p ln(p), zero entries skipped.
pub fn entropy(probs: &[f64]) -> f64 {
    probs
        .iter()
        .filter(|&&p| p != 0.)
        .map(|&p| -p * p.ln())
        .sum()
}
