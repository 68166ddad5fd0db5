//! Column conservation statistics over a multiple sequence alignment.
//!
//! Every statistic reads an [`msa_profile::Alignment`] (and, for some of them, a
//! substitution matrix) and returns a [`ScoreResult`], which [`report`] renders.
#[macro_use]
extern crate log;
extern crate msa_profile;
extern crate rayon;
#[macro_use]
extern crate serde;
extern crate serde_json;
extern crate tempfile;
extern crate thiserror;
pub mod config;
pub mod error;
pub mod report;
pub mod result;
pub mod statistics;
pub use config::{Config, StatisticKind};
pub use error::{Error, Result};
pub use result::ScoreResult;
#[cfg(test)]
mod tests;

use msa_profile::Alignment;

/// Read the alignment, compute the selected statistic, and write the report.
/// Nothing is written if the alignment or the statistic fails.
pub fn run(config: &Config) -> Result<ScoreResult> {
    let mut aln = Alignment::from_file(&config.input, config.max_sequences)?;
    if config.verbose {
        info!(
            "{} sequences of {} columns over {}",
            aln.num_sequences(),
            aln.num_columns(),
            String::from_utf8_lossy(aln.alphabet())
        );
    }
    let counts = if config.basic {
        Some(report::basic_counts(&aln))
    } else {
        None
    };
    let result = statistics::calculate(config.statistic, &mut aln, config)?;
    let rendered = report::render(&result, config)?;
    report::write_atomically(&config.output, &rendered)?;
    if let Some(counts) = counts {
        let path = report::basic_counts_path(&config.output);
        report::write_atomically(&path, &counts)?;
        info!("Residue counts are in {}", path.display());
    }
    Ok(result)
}
