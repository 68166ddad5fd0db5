use super::statistics::{self, column_probabilities, jensen};
use super::*;
use msa_profile::gen_sample::*;
use msa_profile::{henikoff_weights, Alignment};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::path::Path;

const TOY_MATRIX: &str = "H TOY000000
D A small matrix for testing.
M rows = ACDE, cols = ACDE
      5.
     -1.      6.
     -2.     -3.      4.
      0.     -1.      2.      7.
//
";

fn approx(x: f64, y: f64) -> bool {
    (x - y).abs() < 0.000_001
}

// Writes the alignment and the matrix into `dir`, and returns a config reading them.
fn setup(dir: &Path, alignment: &str, statistic: StatisticKind) -> Config {
    let input = dir.join("test.aln.fa");
    std::fs::write(&input, alignment).unwrap();
    std::fs::write(dir.join("toy.mat"), TOY_MATRIX).unwrap();
    Config {
        statistic,
        score_matrix_dir: Some(dir.to_path_buf()),
        score_matrix_file: "toy.mat".to_string(),
        ..Config::new(&input)
    }
}

#[test]
fn conserved_alignment() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), ">a\nAAAA\n>b\nAAAA\n>c\nAAAA\n", StatisticKind::WeightedEntropy);
    let result = run(&config).unwrap();
    // Zero entropy everywhere, hence full conservation.
    assert_eq!(result, ScoreResult::Columns(vec![1.; 4]));
    assert_eq!(config.output, dir.path().join("test.stat"));
    let text = std::fs::read_to_string(&config.output).unwrap();
    assert_eq!(text.lines().next(), Some("1\t1.000000"));
    assert_eq!(text.lines().count(), 4);
    let config = Config {
        global: true,
        ..config
    };
    run(&config).unwrap();
    let text = std::fs::read_to_string(&config.output).unwrap();
    assert_eq!(text, "1.000000\n");
}

#[test]
fn disjoint_columns_kabat() {
    let mut aln = Alignment::from_sequences(&["AC", "GT"]).unwrap();
    let config = Config::new("unused.fa");
    let result = statistics::calculate(StatisticKind::Kabat, &mut aln, &config).unwrap();
    assert_eq!(result, ScoreResult::Columns(vec![2., 2.]));
}

#[test]
fn identical_columns_mlc() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), ">a\nAAD\n>b\nCCE\n", StatisticKind::Mlc);
    let config = Config {
        threshold: 0.99,
        ..config
    };
    run(&config).unwrap();
    let text = std::fs::read_to_string(&config.output).unwrap();
    assert_eq!(text, "pair (1,2) = 1.00 above 0.99\n");
}

#[test]
fn gap_column() {
    let mut aln = Alignment::from_sequences(&["AC-", "AD-", "CE-"]).unwrap();
    let config = Config::new("unused.fa");
    let gaps = statistics::calculate(StatisticKind::Gap, &mut aln, &config).unwrap();
    assert_eq!(gaps.as_columns().unwrap()[2], 1.);
    let scores = statistics::calculate(StatisticKind::WeightedEntropy, &mut aln, &config).unwrap();
    assert_eq!(scores.as_columns().unwrap()[2], 0.);
    let scores = statistics::calculate(StatisticKind::Jensen, &mut aln, &config).unwrap();
    assert_eq!(scores.as_columns().unwrap()[2], 0.);
}

#[test]
fn probabilities_sum_to_one() {
    let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(24);
    for _ in 0..5 {
        let rows = random_alignment(&mut rng, 30, 40, AMINO_ACIDS, &PROFILE);
        let aln = Alignment::from_sequences(&rows).unwrap();
        let weights = henikoff_weights(&aln);
        for mut probs in column_probabilities(&aln, &weights) {
            assert!(approx(probs.iter().sum::<f64>(), 1.));
            jensen::add_pseudo_counts(&mut probs);
            assert!(approx(probs.iter().sum::<f64>(), 1.));
            assert!(probs.iter().all(|&p| p > 0.));
        }
    }
}

#[test]
fn random_alignment_statistics() {
    let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(3);
    let rows = random_alignment(&mut rng, 20, 30, b"ACDE", &PROFILE);
    let dir = tempfile::tempdir().unwrap();
    let fasta: String = rows
        .iter()
        .enumerate()
        .map(|(i, row)| format!(">s{}\n{}\n", i, String::from_utf8_lossy(row)))
        .collect();
    for &kind in StatisticKind::ALL.iter() {
        let config = setup(dir.path(), &fasta, kind);
        match run(&config).unwrap() {
            ScoreResult::Columns(scores) => {
                assert_eq!(scores.len(), 30);
                assert!(scores.iter().all(|s| s.is_finite()), "{}", kind);
            }
            ScoreResult::ColumnPairs(matrix) => {
                assert_eq!(matrix.width(), 30);
                assert!(matrix.as_slice().iter().all(|s| s.is_finite()));
            }
            ScoreResult::Correlations { pairs, .. } => {
                assert!(pairs.iter().all(|c| c.x < c.y && c.value > 0.8));
            }
            ScoreResult::Profiles { alphabet, means } => {
                assert_eq!(alphabet, "ACDE");
                assert_eq!(means.len(), 30);
                assert!(means.iter().flatten().all(|&m| 0. <= m && m <= 1.));
            }
        }
        assert!(config.output.exists());
    }
}

#[test]
fn trident_conserved() {
    let dir = tempfile::tempdir().unwrap();
    let alignment = ">a\nAC\n>b\nAC\n>c\nAE\n>d\nA-\n";
    let config = setup(dir.path(), alignment, StatisticKind::Trident);
    let scores = run(&config).unwrap();
    let scores = scores.as_columns().unwrap();
    assert!(approx(scores[0], 1.));
    assert!(scores[1] < 1. && scores[1] > 0.);
}

#[test]
fn trident_alphabet_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), ">a\nAW\n>b\nAC\n", StatisticKind::Trident);
    match run(&config) {
        Err(Error::Profile(msa_profile::Error::AlphabetMismatch { .. })) => {}
        x => panic!("{:?}", x),
    }
    assert!(!config.output.exists());
}

#[test]
fn mean_vectors() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), ">a\nAW\n>b\nAE\n>c\nA-\n", StatisticKind::MeanVector);
    let result = run(&config).unwrap();
    let means = match result {
        ScoreResult::Profiles { means, .. } => means,
        x => panic!("{:?}", x),
    };
    // W is not in the matrix and is counted as a gap: column 2 holds a single E.
    // Normalized scores are (s + 3) / 10.
    let expected = [[0.3, 0.2, 0.5, 1.0], [0.8, 0.2, 0.1, 0.3]];
    for (a, &e) in expected[1].iter().enumerate() {
        assert!(approx(means[0][a], e));
    }
    for (a, &e) in expected[0].iter().enumerate() {
        assert!(approx(means[1][a], e));
    }
    let text = std::fs::read_to_string(&config.output).unwrap();
    assert!(text.starts_with("A C D E\n0.800000 0.200000 0.100000 0.300000\n"));
}

#[test]
fn missing_matrix_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), ">a\nAC\n>b\nAC\n", StatisticKind::Mlc);
    let config = Config {
        score_matrix_dir: None,
        ..config
    };
    match run(&config) {
        Err(Error::Config(_)) => {}
        x => panic!("{:?}", x),
    }
}

#[test]
fn basic_and_json_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), ">a\nAC\n>b\nA-\n", StatisticKind::Gap);
    let config = Config {
        basic: true,
        json: true,
        ..config
    };
    let result = run(&config).unwrap();
    let json = std::fs::read_to_string(&config.output).unwrap();
    let parsed: ScoreResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
    let counts = std::fs::read_to_string(dir.path().join("test.aa_count")).unwrap();
    assert_eq!(counts.lines().count(), 3);
}

#[test]
fn mutual_information_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), ">a\nAAC\n>b\nCCC\n>c\nDDC\n", StatisticKind::MutualInformation);
    run(&config).unwrap();
    let text = std::fs::read_to_string(&config.output).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0\t1.000000\t0.000000");
    assert_eq!(lines[2], "0\t0\t0");
}

#[test]
fn verbose_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), ">a\nAC\n>b\nAD\n", StatisticKind::Kabat);
    let config = Config {
        verbose: true,
        ..config
    };
    let result = run(&config).unwrap();
    assert_eq!(result.as_columns().map(|s| s.len()), Some(2));
    assert!(config.output.exists());
}
