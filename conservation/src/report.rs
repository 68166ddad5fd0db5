//! Rendering of the results and writing of the output files.
//!
//! Reports are rendered in memory first, then written to a temporary file
//! in the destination directory and renamed over the destination.
use crate::config::Config;
use crate::error::{Error, Result};
use crate::result::{Correlation, ScoreResult};
use msa_profile::{Alignment, TriangularMatrix};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Symbols counted by the basic report, in this order.
pub const BASIC_DICTIONARY: &[u8] = b"ARNDCQEGHILKMFPSTWYV-";

pub fn render(result: &ScoreResult, config: &Config) -> Result<String> {
    if config.json {
        let mut json = serde_json::to_string_pretty(result)?;
        json.push('\n');
        return Ok(json);
    }
    let text = match result {
        ScoreResult::Columns(_) if config.global => {
            let global = result.global_score().unwrap_or(0.);
            format!("{:.6}\n", global)
        }
        ScoreResult::Columns(scores) => columns(scores),
        ScoreResult::ColumnPairs(matrix) => {
            if config.global {
                warn!("{} has no global score. Output every pair.", config.statistic);
            }
            column_pairs(matrix)
        }
        ScoreResult::Correlations { threshold, pairs } => correlations(pairs, *threshold),
        ScoreResult::Profiles { alphabet, means } => profiles(alphabet, means),
    };
    Ok(text)
}

/// `col\tscore`, one line per column, 1-based.
pub fn columns(scores: &[f64]) -> String {
    scores
        .iter()
        .enumerate()
        .map(|(col, score)| format!("{}\t{:.6}\n", col + 1, score))
        .collect()
}

/// One line per column x, the value of (x,y) at the y-th field, 0 for y <= x.
pub fn column_pairs(matrix: &TriangularMatrix<f64>) -> String {
    let width = matrix.width();
    let mut text = String::new();
    for x in 0..width {
        let line: Vec<_> = (0..width)
            .map(|y| {
                if y > x {
                    format!("{:.6}", matrix.get(x, y))
                } else {
                    "0".to_string()
                }
            })
            .collect();
        text.push_str(&line.join("\t"));
        text.push('\n');
    }
    text
}

pub fn correlations(pairs: &[Correlation], threshold: f64) -> String {
    pairs
        .iter()
        .map(|c| {
            format!(
                "pair ({},{}) = {:.2} above {}\n",
                c.x + 1,
                c.y + 1,
                c.value,
                threshold
            )
        })
        .collect()
}

/// A header with the alphabet, then the mean vector of each column.
pub fn profiles(alphabet: &str, means: &[Vec<f64>]) -> String {
    let header: Vec<_> = alphabet.chars().map(|c| c.to_string()).collect();
    let mut text = header.join(" ");
    text.push('\n');
    for mean in means {
        let line: Vec<_> = mean.iter().map(|m| format!("{:.6}", m)).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}

/// Per column counts of each symbol of [`BASIC_DICTIONARY`].
pub fn basic_counts(aln: &Alignment) -> String {
    let header: Vec<_> = BASIC_DICTIONARY
        .iter()
        .map(|&c| (c as char).to_string())
        .collect();
    let mut text = header.join(" ");
    text.push('\n');
    let mut skipped = 0;
    for col in 0..aln.num_columns() {
        let mut counts = vec![0; BASIC_DICTIONARY.len()];
        for seq in aln.sequences() {
            match BASIC_DICTIONARY.iter().position(|&c| c == seq[col]) {
                Some(idx) => counts[idx] += 1,
                None => skipped += 1,
            }
        }
        let line: Vec<_> = counts.iter().map(|c| c.to_string()).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    if skipped > 0 {
        let dictionary = String::from_utf8_lossy(BASIC_DICTIONARY);
        warn!("{} residues are not in {} and are not counted.", skipped, dictionary);
    }
    text
}

/// The output file name up to its first '.', followed by ".aa_count".
pub fn basic_counts_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or("");
    output.with_file_name(format!("{}.aa_count", stem))
}

/// Write `content` to `path`, all or nothing.
pub fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::output(path, e))?;
    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| Error::output(path, e))?;
    file.persist(path)
        .map_err(|e| Error::output(path, e.error))?;
    debug!("Wrote {}", path.display());
    Ok(())
}
