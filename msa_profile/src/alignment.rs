//! The multiple alignment together with the tables derived from it.
//!
//! All tables are computed once, right after parsing.
//! The only mutation is [`Alignment::restrict_to_alphabet`], after which every table is rebuilt.
use crate::error::{Error, Result};
use crate::fasta::{self, Record};
use crate::{is_gap, GAP};
use std::io::BufRead;
use std::path::Path;

/// The number of sequences read from a file unless told otherwise.
pub const DEFAULT_MAX_SEQUENCES: usize = 500;

#[derive(Debug, Clone)]
pub struct Alignment {
    names: Vec<String>,
    /// Upper-cased rows, all of the same length.
    sequences: Vec<Vec<u8>>,
    /// Distinct symbols, in the order they are met scanning column by column.
    alphabet: Vec<u8>,
    /// Symbol -> position in the alphabet.
    index_table: Vec<Option<usize>>,
    gap_counts: Vec<usize>,
    /// Frequency of each alphabet symbol over all the N*L positions.
    frequencies: Vec<f64>,
    /// Distinct symbols of each column, in row order of first appearance.
    column_types: Vec<Vec<u8>>,
    column_entropy: Vec<f64>,
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "nb seq = {}, nb col = {}, alphabet = {}",
            self.num_sequences(),
            self.num_columns(),
            String::from_utf8_lossy(&self.alphabet)
        )
    }
}

impl Alignment {
    /// Read at most `max_sequences` sequences from an aligned FASTA file.
    pub fn from_file<P: AsRef<Path>>(file: P, max_sequences: usize) -> Result<Self> {
        debug!("Read multiple alignment in {}", file.as_ref().display());
        fasta::parse_into_vec(file, max_sequences).and_then(Self::new)
    }
    pub fn from_reader<R: BufRead>(reader: R, max_sequences: usize) -> Result<Self> {
        fasta::parse_from_reader(reader, max_sequences).and_then(Self::new)
    }
    /// Build an alignment from bare rows. Rows are named seq0, seq1, ...
    pub fn from_sequences<S: AsRef<[u8]>>(seqs: &[S]) -> Result<Self> {
        let records = seqs
            .iter()
            .enumerate()
            .map(|(idx, seq)| Record::new(&format!("seq{}", idx), seq.as_ref()))
            .collect();
        Self::new(records)
    }
    /// Rows longer than the first one are truncated and shorter ones are padded with gaps.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let ncol = match records.first() {
            Some(record) if !record.seq().is_empty() => record.seq().len(),
            _ => return Err(Error::EmptyAlignment),
        };
        let mut names = Vec::with_capacity(records.len());
        let mut sequences = Vec::with_capacity(records.len());
        for record in records {
            names.push(record.id().to_string());
            let mut seq = record.into_seq();
            if seq.len() != ncol {
                warn!(
                    "{} has {} columns while the first sequence has {}. Fit to {}.",
                    names[names.len() - 1],
                    seq.len(),
                    ncol,
                    ncol
                );
                seq.resize(ncol, GAP);
            }
            seq.make_ascii_uppercase();
            sequences.push(seq);
        }
        let mut aln = Self {
            names,
            sequences,
            alphabet: vec![],
            index_table: vec![None; 256],
            gap_counts: vec![],
            frequencies: vec![],
            column_types: vec![],
            column_entropy: vec![],
        };
        aln.analyze();
        info!("Multiple alignment : {}", aln);
        Ok(aln)
    }
    fn analyze(&mut self) {
        self.define_alphabet();
        self.count_gaps();
        self.count_frequencies();
        self.count_types();
        self.count_entropy();
        if log_enabled!(log::Level::Debug) {
            self.log_tables();
        }
    }
    fn define_alphabet(&mut self) {
        let mut alphabet = vec![];
        let mut index_table = vec![None; 256];
        for col in 0..self.num_columns() {
            for seq in self.sequences.iter() {
                let symbol = seq[col] as usize;
                if index_table[symbol].is_none() {
                    index_table[symbol] = Some(alphabet.len());
                    alphabet.push(seq[col]);
                }
            }
        }
        self.alphabet = alphabet;
        self.index_table = index_table;
    }
    fn count_gaps(&mut self) {
        self.gap_counts = (0..self.num_columns())
            .map(|col| {
                self.sequences
                    .iter()
                    .filter(|seq| is_gap(seq[col]))
                    .count()
            })
            .collect();
    }
    fn count_frequencies(&mut self) {
        let mut counts = vec![0usize; self.alphabet.len()];
        for seq in self.sequences.iter() {
            for &symbol in seq.iter() {
                counts[self.index_of(symbol)] += 1;
            }
        }
        let total = (self.num_sequences() * self.num_columns()) as f64;
        self.frequencies = counts.iter().map(|&c| c as f64 / total).collect();
    }
    fn count_types(&mut self) {
        self.column_types = (0..self.num_columns())
            .map(|col| {
                let mut types: Vec<u8> = vec![];
                for seq in self.sequences.iter() {
                    if !types.contains(&seq[col]) {
                        types.push(seq[col]);
                    }
                }
                types
            })
            .collect();
    }
    // Normalized by log(K - 1) as the gap symbol is assumed to be in the alphabet,
    // whether or not it actually is.
    fn count_entropy(&mut self) {
        let nseq = self.num_sequences() as f64;
        let normalizer = (self.alphabet.len() as f64 - 1.).ln();
        let mut counts = vec![0usize; self.alphabet.len()];
        self.column_entropy = (0..self.num_columns())
            .map(|col| {
                counts.iter_mut().for_each(|c| *c = 0);
                for seq in self.sequences.iter() {
                    counts[self.index_of(seq[col])] += 1;
                }
                let entropy = counts
                    .iter()
                    .filter(|&&c| c > 0)
                    .map(|&c| {
                        let p = c as f64 / nseq;
                        -p * p.ln()
                    })
                    .sum::<f64>();
                if normalizer > 0. {
                    entropy / normalizer
                } else {
                    entropy
                }
            })
            .collect();
    }
    fn log_tables(&self) {
        debug!("Alphabet:{}", String::from_utf8_lossy(&self.alphabet));
        for (name, seq) in self.names.iter().zip(self.sequences.iter()) {
            debug!("{}\t{}", name, String::from_utf8_lossy(seq));
        }
        debug!("AA frequencies:{:?}", self.frequencies);
        debug!("Gap counts:{:?}", self.gap_counts);
        debug!("AA entropy:{:?}", self.column_entropy);
        let types: Vec<_> = self.column_types.iter().map(|t| t.len()).collect();
        debug!("AA types:{:?}", types);
    }
    // Every symbol of the alignment is in the alphabet by construction.
    #[inline]
    fn index_of(&self, symbol: u8) -> usize {
        self.index_table[symbol as usize].unwrap_or(0)
    }
    pub fn num_sequences(&self) -> usize {
        self.sequences.len()
    }
    pub fn num_columns(&self) -> usize {
        self.sequences.first().map(|seq| seq.len()).unwrap_or(0)
    }
    pub fn names(&self) -> &[String] {
        &self.names
    }
    pub fn sequences(&self) -> &[Vec<u8>] {
        &self.sequences
    }
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }
    pub fn alphabet_index(&self, symbol: u8) -> Option<usize> {
        self.index_table[symbol as usize]
    }
    /// Rows re-encoded as positions in the alphabet.
    pub fn encoded(&self) -> Vec<Vec<usize>> {
        self.sequences
            .iter()
            .map(|seq| seq.iter().map(|&s| self.index_of(s)).collect())
            .collect()
    }
    pub fn column(&self, col: usize) -> Result<Vec<u8>> {
        Error::check_index(col, self.num_columns())?;
        Ok(self.sequences.iter().map(|seq| seq[col]).collect())
    }
    pub fn symbol(&self, row: usize, col: usize) -> Result<u8> {
        Error::check_index(row, self.num_sequences())?;
        Error::check_index(col, self.num_columns())?;
        Ok(self.sequences[row][col])
    }
    pub fn gap_count(&self, col: usize) -> Result<usize> {
        Error::check_index(col, self.num_columns())?;
        Ok(self.gap_counts[col])
    }
    pub fn gap_counts(&self) -> &[usize] {
        &self.gap_counts
    }
    /// Fraction of gaps in each column.
    pub fn gap_fractions(&self) -> Vec<f64> {
        let nseq = self.num_sequences() as f64;
        self.gap_counts.iter().map(|&g| g as f64 / nseq).collect()
    }
    pub fn type_list(&self, col: usize) -> Result<&[u8]> {
        Error::check_index(col, self.num_columns())?;
        Ok(&self.column_types[col])
    }
    pub fn type_count(&self, col: usize) -> Result<usize> {
        self.type_list(col).map(|types| types.len())
    }
    pub fn column_types(&self) -> &[Vec<u8>] {
        &self.column_types
    }
    pub fn frequency(&self, symbol: u8) -> Result<f64> {
        self.alphabet_index(symbol)
            .map(|idx| self.frequencies[idx])
            .ok_or(Error::SymbolNotFound(symbol as char))
    }
    /// Frequencies indexed as the alphabet.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }
    pub fn column_entropy(&self, col: usize) -> Result<f64> {
        Error::check_index(col, self.num_columns())?;
        Ok(self.column_entropy[col])
    }
    pub fn column_entropies(&self) -> &[f64] {
        &self.column_entropy
    }
    /// True if every non-gap symbol of this alignment is in `other`.
    pub fn is_alphabet_subset_of(&self, other: &[u8]) -> bool {
        self.alphabet
            .iter()
            .all(|s| is_gap(*s) || other.contains(s))
    }
    /// Replace every non-gap symbol absent from `other` by a gap, then rebuild the tables.
    /// Returns the number of replaced residues.
    pub fn restrict_to_alphabet(&mut self, other: &[u8]) -> usize {
        let mut replaced = 0;
        for seq in self.sequences.iter_mut() {
            for symbol in seq.iter_mut() {
                if !is_gap(*symbol) && !other.contains(symbol) {
                    *symbol = GAP;
                    replaced += 1;
                }
            }
        }
        if replaced > 0 {
            debug!("{} residues not in {} are now gaps.", replaced, String::from_utf8_lossy(other));
            self.analyze();
        }
        replaced
    }
}
