//! McLachlan correlation between columns.
//!
//! A column x is turned into the N*N table s_x(k,l) = M(x_k, x_l), zero whenever
//! a gap is involved. Two columns are compared by the correlation of their tables:
//! c(x,y) = sum_{k,l} (s_x(k,l) - mean_x)(s_y(k,l) - mean_y) / (stdev_x * stdev_y * N^2).
//! Columns with more than N/10 gaps, or with a constant table, are skipped.
//! Two identical columns have a correlation of exactly 1.
use super::check_alphabet;
use crate::result::Correlation;
use msa_profile::{is_gap, Alignment, Result, ScoringMatrix};
use rayon::prelude::*;

#[derive(Debug, Clone)]
struct PairTable {
    scores: Vec<f64>,
    mean: f64,
    stdev: f64,
}

impl PairTable {
    // The mean and the deviation are taken over the (N - gaps)^2 residue pairs,
    // while the table still holds N^2 cells.
    fn new(column: &[u8], gaps: usize, matrix: &ScoringMatrix) -> Result<Self> {
        let indices = column
            .iter()
            .map(|&s| {
                if is_gap(s) {
                    Ok(None)
                } else {
                    matrix.index(s).map(Some)
                }
            })
            .collect::<Result<Vec<Option<usize>>>>()?;
        let mut scores = Vec::with_capacity(indices.len() * indices.len());
        for k in indices.iter() {
            for l in indices.iter() {
                let score = match (k, l) {
                    (&Some(k), &Some(l)) => matrix.score_by_index(k, l),
                    _ => 0.,
                };
                scores.push(score);
            }
        }
        let pairs = ((column.len() - gaps) * (column.len() - gaps)) as f64;
        if pairs == 0. {
            return Ok(Self {
                scores,
                mean: 0.,
                stdev: 0.,
            });
        }
        let mean = scores.iter().sum::<f64>() / pairs;
        let total: f64 = scores.iter().map(|s| (s - mean).powi(2)).sum();
        let stdev = (total / pairs).sqrt();
        Ok(Self {
            scores,
            mean,
            stdev,
        })
    }
    fn correlation(&self, other: &Self) -> f64 {
        let covariance: f64 = self
            .scores
            .iter()
            .zip(other.scores.iter())
            .map(|(s, t)| (s - self.mean) * (t - other.mean))
            .sum();
        covariance / (self.stdev * other.stdev * self.scores.len() as f64)
    }
}

/// Pairs `x < y` of included columns whose correlation is above `threshold`, in (x,y) order.
pub fn mlc(aln: &Alignment, matrix: &ScoringMatrix, threshold: f64) -> Result<Vec<Correlation>> {
    check_alphabet(aln, matrix)?;
    let max_gap = aln.num_sequences() / 10;
    let columns = (0..aln.num_columns())
        .map(|col| aln.column(col))
        .collect::<Result<Vec<_>>>()?;
    let tables: Vec<Option<PairTable>> = columns
        .par_iter()
        .zip(aln.gap_counts().par_iter())
        .map(|(column, &gaps)| -> Result<Option<PairTable>> {
            if gaps > max_gap {
                return Ok(None);
            }
            let table = PairTable::new(column, gaps, matrix)?;
            Ok(Some(table).filter(|t| t.stdev != 0.))
        })
        .collect::<Result<_>>()?;
    let included: Vec<(usize, &PairTable)> = tables
        .iter()
        .enumerate()
        .filter_map(|(col, table)| table.as_ref().map(|t| (col, t)))
        .collect();
    debug!(
        "{} out of {} columns are compared.",
        included.len(),
        columns.len()
    );
    let correlations: Vec<Vec<Correlation>> = (0..included.len())
        .into_par_iter()
        .map(|i| {
            let (x, table_x) = included[i];
            included[i + 1..]
                .iter()
                .map(|&(y, table_y)| {
                    let value = if columns[x] == columns[y] {
                        1.
                    } else {
                        table_x.correlation(table_y)
                    };
                    Correlation { x, y, value }
                })
                .filter(|c| c.value > threshold)
                .collect()
        })
        .collect();
    Ok(correlations.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    const TOY: &str = "M rows = ACDE, cols = ACDE
      5.
     -1.      6.
     -2.     -3.      4.
      0.     -1.      2.      7.
";
    #[test]
    fn identical_columns() {
        let matrix = ScoringMatrix::from_reader(TOY.as_bytes()).unwrap();
        let aln = Alignment::from_sequences(&["AAD", "CCE"]).unwrap();
        let pairs = mlc(&aln, &matrix, 0.95).unwrap();
        assert_eq!(pairs, vec![Correlation { x: 0, y: 1, value: 1. }]);
        let pairs = mlc(&aln, &matrix, 0.).unwrap();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|c| c.value <= 1.));
    }
    #[test]
    fn skip_gapped_and_constant() {
        let matrix = ScoringMatrix::from_reader(TOY.as_bytes()).unwrap();
        // N/10 is zero, so the gap in column 1 excludes it. Column 2 is constant.
        let aln = Alignment::from_sequences(&["A-AA", "CCAC"]).unwrap();
        let pairs = mlc(&aln, &matrix, -1.).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].x, pairs[0].y), (0, 3));
    }
    #[test]
    fn alphabet_mismatch() {
        let matrix = ScoringMatrix::from_reader(TOY.as_bytes()).unwrap();
        let aln = Alignment::from_sequences(&["AW", "CC"]).unwrap();
        assert!(mlc(&aln, &matrix, 0.8).is_err());
    }
}
