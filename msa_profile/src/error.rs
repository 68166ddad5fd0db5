use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(
        "multiple alignment alphabet ({alignment}) is not included in score matrix alphabet ({matrix})"
    )]
    AlphabetMismatch { alignment: String, matrix: String },
    #[error("symbol {0:?} is not in the alphabet")]
    SymbolNotFound(char),
    #[error("score matrix is constant (every entry is {0}), normalized scores are undefined")]
    DegenerateMatrix(f64),
    #[error("the multiple alignment is empty")]
    EmptyAlignment,
    #[error("index {index} is out of range (size {size})")]
    IndexOutOfRange { index: usize, size: usize },
}

impl Error {
    pub(crate) fn file<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::File {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn check_index(index: usize, size: usize) -> Result<()> {
        if index < size {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, size })
        }
    }
}
