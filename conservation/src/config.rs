//! The run configuration. Built once, then passed around by reference.
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_MATRIX: &str = "mclachlan71.mat";
pub const DEFAULT_THRESHOLD: f64 = 0.8;
pub const DEFAULT_TRIDENT_FACTORS: (f64, f64, f64) = (1.0, 0.5, 3.0);
pub const DEFAULT_WINDOW: usize = 3;

/// The statistics available by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatisticKind {
    WeightedEntropy,
    Trident,
    MutualInformation,
    Kabat,
    Jensen,
    MeanVector,
    Mlc,
    Gap,
}

impl StatisticKind {
    pub const ALL: [StatisticKind; 8] = [
        StatisticKind::WeightedEntropy,
        StatisticKind::Trident,
        StatisticKind::MutualInformation,
        StatisticKind::Kabat,
        StatisticKind::Jensen,
        StatisticKind::MeanVector,
        StatisticKind::Mlc,
        StatisticKind::Gap,
    ];
    pub fn name(self) -> &'static str {
        match self {
            StatisticKind::WeightedEntropy => "wentropy",
            StatisticKind::Trident => "trident",
            StatisticKind::MutualInformation => "mutual",
            StatisticKind::Kabat => "kabat",
            StatisticKind::Jensen => "jensen",
            StatisticKind::MeanVector => "mvector",
            StatisticKind::Mlc => "mlc",
            StatisticKind::Gap => "gap",
        }
    }
    /// True if the statistic reads a substitution matrix.
    pub fn needs_matrix(self) -> bool {
        match self {
            StatisticKind::Trident | StatisticKind::MeanVector | StatisticKind::Mlc => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for StatisticKind {
    type Err = Error;
    fn from_str(name: &str) -> Result<Self> {
        let name = name.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                Error::Config(format!(
                    "unknown statistic \"{}\". Available: {}",
                    name,
                    names.join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Aligned FASTA file.
    pub input: PathBuf,
    pub output: PathBuf,
    /// Directory holding the substitution matrices.
    pub score_matrix_dir: Option<PathBuf>,
    /// File name of the substitution matrix, inside `score_matrix_dir`.
    pub score_matrix_file: String,
    pub statistic: StatisticKind,
    /// Sequences after this many are ignored.
    pub max_sequences: usize,
    pub verbose: bool,
    /// Report a single score for the whole alignment.
    pub global: bool,
    /// Also write the residue counts of each column.
    pub basic: bool,
    pub json: bool,
    /// Correlations at or below this value are not reported (MLC).
    pub threshold: f64,
    /// Exponents of the entropy, the stereochemical and the gap terms of the trident score.
    pub trident_factors: (f64, f64, f64),
    /// Number of side columns on each side (Jensen).
    pub window: usize,
    pub threads: usize,
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let dir = match self.score_matrix_dir.as_ref() {
            Some(dir) => dir.display().to_string(),
            None => "-".to_string(),
        };
        writeln!(f, "Input:{}", self.input.display())?;
        writeln!(f, "Output:{}", self.output.display())?;
        writeln!(f, "ScoreMatrix:{}/{}", dir, self.score_matrix_file)?;
        writeln!(f, "Statistic:{}", self.statistic)?;
        writeln!(f, "MaxSequences:{}", self.max_sequences)?;
        writeln!(f, "Global:{}", self.global)?;
        writeln!(f, "Basic:{}", self.basic)?;
        writeln!(f, "Json:{}", self.json)?;
        writeln!(f, "Threshold:{:.3}", self.threshold)?;
        let (a, b, c) = self.trident_factors;
        writeln!(f, "TridentFactors:[a,b,c]=[{:.3},{:.3},{:.3}]", a, b, c)?;
        writeln!(f, "Window:{}", self.window)?;
        write!(f, "Threads:{}", self.threads)
    }
}

impl Config {
    /// Default settings for `input`.
    pub fn new<P: AsRef<Path>>(input: P) -> Self {
        let input = input.as_ref().to_path_buf();
        Self {
            output: default_output(&input),
            input,
            score_matrix_dir: None,
            score_matrix_file: DEFAULT_MATRIX.to_string(),
            statistic: StatisticKind::WeightedEntropy,
            max_sequences: msa_profile::alignment::DEFAULT_MAX_SEQUENCES,
            verbose: false,
            global: false,
            basic: false,
            json: false,
            threshold: DEFAULT_THRESHOLD,
            trident_factors: DEFAULT_TRIDENT_FACTORS,
            window: DEFAULT_WINDOW,
            threads: 1,
        }
    }
    /// Full path to the substitution matrix.
    pub fn score_matrix(&self) -> Result<PathBuf> {
        match self.score_matrix_dir.as_ref() {
            Some(dir) => Ok(dir.join(&self.score_matrix_file)),
            None => Err(Error::Config(format!(
                "{} needs a score matrix directory (-p or SCORE_MAT_PATH)",
                self.statistic
            ))),
        }
    }
}

/// The input file name up to its first '.', followed by ".stat", next to the input.
pub fn default_output(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or("");
    input.with_file_name(format!("{}.stat", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn output_name() {
        let output = default_output(Path::new("data/globin.aln.fa"));
        assert_eq!(output, PathBuf::from("data/globin.stat"));
        let output = default_output(Path::new("globin"));
        assert_eq!(output, PathBuf::from("globin.stat"));
    }
    #[test]
    fn statistic_names() {
        for kind in StatisticKind::ALL.iter() {
            let parsed: StatisticKind = kind.name().parse().unwrap();
            assert_eq!(parsed, *kind);
        }
        assert_eq!("MLC".parse::<StatisticKind>().unwrap(), StatisticKind::Mlc);
        assert!("entropy".parse::<StatisticKind>().is_err());
    }
    #[test]
    fn defaults() {
        let config = Config::new("test.fa");
        assert_eq!(config.statistic, StatisticKind::WeightedEntropy);
        assert_eq!(config.max_sequences, 500);
        assert_eq!(config.window, 3);
        assert_eq!(config.score_matrix_file, "mclachlan71.mat");
        assert!(config.score_matrix().is_err());
        let config = Config {
            score_matrix_dir: Some(PathBuf::from("/matrices")),
            ..config
        };
        assert_eq!(
            config.score_matrix().unwrap(),
            PathBuf::from("/matrices/mclachlan71.mat")
        );
    }
}
