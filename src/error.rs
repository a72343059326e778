use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors for a single data line.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected two values (x y), found {found}")]
    MissingToken { found: usize },
    #[error("invalid number '{token}': {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Errors while loading a coordinate set.
/// Line numbers are 1-based and count the header line.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}
