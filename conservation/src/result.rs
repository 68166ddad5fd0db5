//! What a statistic returns: one shape per kind of output.
use msa_profile::TriangularMatrix;

/// A pair of columns (0-based, `x < y`) and their correlation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub x: usize,
    pub y: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScoreResult {
    /// One score per column.
    Columns(Vec<f64>),
    /// One score per pair of columns. Only `x < y` is meaningful.
    ColumnPairs(TriangularMatrix<f64>),
    /// The pairs of columns correlated above `threshold`.
    Correlations {
        threshold: f64,
        pairs: Vec<Correlation>,
    },
    /// One mean vector per column, indexed by `alphabet`.
    Profiles {
        alphabet: String,
        means: Vec<Vec<f64>>,
    },
}

impl ScoreResult {
    /// The mean of the column scores. Only per-column results have one.
    pub fn global_score(&self) -> Option<f64> {
        match self {
            ScoreResult::Columns(scores) if scores.is_empty() => Some(0.),
            ScoreResult::Columns(scores) => Some(scores.iter().sum::<f64>() / scores.len() as f64),
            _ => None,
        }
    }
    pub fn as_columns(&self) -> Option<&[f64]> {
        match self {
            ScoreResult::Columns(scores) => Some(scores.as_slice()),
            _ => None,
        }
    }
}
