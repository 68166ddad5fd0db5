//! A minimal reader for aligned FASTA files.
//!
//! A line starting with `>` opens a new record, whose name is the text up to the first space.
//! Every other line is trimmed and appended to the current record.
//! Lines before the first header are ignored.
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    id: String,
    seq: Vec<u8>,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}", self.id, String::from_utf8_lossy(&self.seq))
    }
}

impl Record {
    pub fn new(id: &str, seq: &[u8]) -> Self {
        Self {
            id: id.to_string(),
            seq: seq.to_vec(),
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn seq(&self) -> &[u8] {
        &self.seq
    }
    pub fn into_seq(self) -> Vec<u8> {
        self.seq
    }
}

/// Parse at most `max_records` records from `file`.
pub fn parse_into_vec<P: AsRef<Path>>(file: P, max_records: usize) -> Result<Vec<Record>> {
    let path = file.as_ref();
    let reader = File::open(path).map_err(|why| Error::file(path, why))?;
    parse_from_reader(BufReader::new(reader), max_records)
}

pub fn parse_from_reader<R: BufRead>(reader: R, max_records: usize) -> Result<Vec<Record>> {
    let mut records: Vec<Record> = vec![];
    let mut current: Option<Record> = None;
    for line in reader.lines() {
        let line = line?;
        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            if records.len() >= max_records {
                break;
            }
            let header = header.trim_end();
            let id = header.split(' ').next().unwrap_or("");
            current = Some(Record::new(id, b""));
        } else if let Some(record) = current.as_mut() {
            record.seq.extend(line.trim().as_bytes());
        }
    }
    if let Some(record) = current {
        if records.len() < max_records {
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn multiline_records() {
        let input = "stray line\n>seq1 first sequence\nAC-\n  GT\n>seq2\nacg\nt-\n";
        let records = parse_from_reader(input.as_bytes(), 10).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].seq(), b"AC-GT");
        assert_eq!(records[1].id(), "seq2");
        assert_eq!(records[1].seq(), b"acgt-");
    }
    #[test]
    fn record_cap() {
        let input = ">a\nAA\n>b\nCC\n>c\nGG\n";
        let records = parse_from_reader(input.as_bytes(), 2).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].seq(), b"CC");
        let records = parse_from_reader(input.as_bytes(), 0).unwrap();
        assert!(records.is_empty());
    }
    #[test]
    fn no_header() {
        let records = parse_from_reader("ACGT\nACGT\n".as_bytes(), 10).unwrap();
        assert!(records.is_empty());
    }
    #[test]
    fn missing_file() {
        match parse_into_vec("/no/such/dir/aln.fasta", 10) {
            Err(Error::File { .. }) => {}
            x => panic!("{:?}", x),
        }
    }
}
