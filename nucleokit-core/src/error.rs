use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("invalid argument: {msg}")]
    InvalidArgument { msg: String },

    #[error("invalid frame: {frame} (must be 0, 1, or 2)")]
    InvalidFrame { frame: usize },

    #[error("no sequence data found in {source_name}")]
    EmptySequence { source_name: String },

    #[error("expected 4 rows in motif profile, found {found}")]
    ProfileRowCount { found: usize },

    #[error("motif profile has no columns")]
    ProfileEmpty,

    #[error("inconsistent column counts in motif profile rows: {widths:?}")]
    ProfileInconsistentWidth { widths: Vec<usize> },

    #[error("non-numeric value '{token}' on line {line} of motif profile")]
    ProfileNonNumeric { line: usize, token: String },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("tsv write error: {0}")]
    CsvWrite(#[from] csv::Error),
}

impl BioError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        BioError::InvalidArgument { msg: msg.into() }
    }
}

pub type BioResult<T> = Result<T, BioError>;
