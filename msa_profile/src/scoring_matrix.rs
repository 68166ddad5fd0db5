//! Symmetric substitution matrices in the AAindex format (http://www.genome.jp/aaindex/).
//!
//! ```text
//! H MCLA710101
//! D ...
//! M rows = ARNDCQEGHILKMFPSTWYV, cols = ARNDCQEGHILKMFPSTWYV
//!       8.
//!       2.      8.
//! ```
//! Comment lines come first, then the `M` line declaring the alphabet,
//! then the lower triangle, one row per symbol, in 8-character wide fields.
use crate::error::{Error, Result};
use crate::triangular::TriangularMatrix;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const FIELD_WIDTH: usize = 8;

#[derive(Debug, Clone)]
pub struct ScoringMatrix {
    alphabet: Vec<u8>,
    index_table: Vec<Option<usize>>,
    scores: TriangularMatrix<f64>,
    normalized: TriangularMatrix<f64>,
    min: f64,
    max: f64,
}

impl std::fmt::Display for ScoringMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Normalized:")?;
        for (i, &a) in self.alphabet.iter().enumerate() {
            write!(f, "{:>9}", a as char)?;
            for j in 0..=i {
                write!(f, "{:>9.3}", self.normalized.get(i, j))?;
            }
            writeln!(f)?;
        }
        write!(f, "{:>9}", ' ')?;
        for &a in self.alphabet.iter() {
            write!(f, "{:>9}", a as char)?;
        }
        Ok(())
    }
}

impl ScoringMatrix {
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let path = file.as_ref();
        if path.as_os_str().is_empty() {
            let why = std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "score matrix file name is empty",
            );
            return Err(Error::file(path, why));
        }
        debug!("Read scoring matrix in {}", path.display());
        let reader = File::open(path).map_err(|why| Error::file(path, why))?;
        Self::from_reader(BufReader::new(reader))
    }
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let header = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if line.starts_with('M') {
                        break line;
                    }
                }
                None => {
                    let msg = "no line starting with 'M' declaring the alphabet";
                    return Err(Error::Parse(msg.to_string()));
                }
            }
        };
        let alphabet = parse_alphabet(&header)?;
        let size = alphabet.len();
        let mut scores = TriangularMatrix::new(size);
        let (mut min, mut max) = (std::f64::MAX, std::f64::MIN);
        for i in 0..size {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    let msg = format!("{} rows are declared but only {} follow", size, i);
                    return Err(Error::Parse(msg));
                }
            };
            for (j, value) in parse_row(&line, i)?.into_iter().enumerate() {
                min = min.min(value);
                max = max.max(value);
                scores.set(i, j, value);
            }
        }
        for line in lines {
            let line = line?;
            let line = line.trim();
            if line.starts_with("//") {
                break;
            } else if !line.is_empty() {
                let msg = format!("{} rows are declared but more follow:\"{}\"", size, line);
                return Err(Error::Parse(msg));
            }
        }
        if max <= min {
            return Err(Error::DegenerateMatrix(min));
        }
        let mut normalized = TriangularMatrix::new(size);
        for i in 0..size {
            for j in 0..=i {
                normalized.set(i, j, (scores.get(i, j) - min) / (max - min));
            }
        }
        let mut index_table = vec![None; 256];
        for (idx, &a) in alphabet.iter().enumerate() {
            index_table[a as usize] = Some(idx);
        }
        let matrix = Self {
            alphabet,
            index_table,
            scores,
            normalized,
            min,
            max,
        };
        debug!("{}", matrix);
        Ok(matrix)
    }
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }
    pub fn len(&self) -> usize {
        self.alphabet.len()
    }
    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }
    pub fn min(&self) -> f64 {
        self.min
    }
    pub fn max(&self) -> f64 {
        self.max
    }
    pub fn index(&self, symbol: u8) -> Result<usize> {
        self.index_table[symbol as usize].ok_or(Error::SymbolNotFound(symbol as char))
    }
    pub fn score(&self, a: u8, b: u8) -> Result<f64> {
        Ok(self.scores.get(self.index(a)?, self.index(b)?))
    }
    /// (score(a,b) - min) / (max - min), in [0,1].
    pub fn norm_score(&self, a: u8, b: u8) -> Result<f64> {
        Ok(self.normalized.get(self.index(a)?, self.index(b)?))
    }
    #[inline]
    pub fn score_by_index(&self, i: usize, j: usize) -> f64 {
        self.scores.get(i, j)
    }
    #[inline]
    pub fn norm_score_by_index(&self, i: usize, j: usize) -> f64 {
        self.normalized.get(i, j)
    }
}

fn parse_alphabet(header: &str) -> Result<Vec<u8>> {
    let error = || Error::Parse(format!("cannot find the alphabet in \"{}\"", header));
    let start = header.find('=').ok_or_else(error)? + 1;
    let rest = &header[start..];
    let end = rest.find(',').unwrap_or_else(|| rest.len());
    let alphabet: Vec<u8> = rest[..end].trim().bytes().collect();
    if alphabet.is_empty() {
        return Err(error());
    }
    for (i, a) in alphabet.iter().enumerate() {
        if alphabet[..i].contains(a) {
            let msg = format!("{} appears twice in the alphabet", *a as char);
            return Err(Error::Parse(msg));
        }
    }
    Ok(alphabet)
}

// Row `row` holds row + 1 values.
fn parse_row(line: &str, row: usize) -> Result<Vec<f64>> {
    let error = || {
        let msg = format!("row {} should hold {} values:\"{}\"", row + 1, row + 1, line);
        Error::Parse(msg)
    };
    if line.split_whitespace().count() > row + 1 {
        return Err(error());
    }
    let fixed: Option<Vec<f64>> = (0..=row)
        .map(|j| {
            let end = ((j + 1) * FIELD_WIDTH).min(line.len());
            line.get(j * FIELD_WIDTH..end)
                .and_then(|field| field.trim().parse().ok())
        })
        .collect();
    if let Some(values) = fixed {
        return Ok(values);
    }
    let values: Vec<f64> = line
        .split_whitespace()
        .take(row + 1)
        .filter_map(|field| field.parse().ok())
        .collect();
    if values.len() == row + 1 {
        Ok(values)
    } else {
        Err(error())
    }
}
