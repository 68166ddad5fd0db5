use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Profile(#[from] msa_profile::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("cannot write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize the result: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn output<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::Output {
            path: path.into(),
            source,
        }
    }
}
