use std::path::PathBuf;

use thiserror::Error;

/// Malformed text handed to the pair finder, such as a test case input line
/// or a command line value list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected a bracketed list like [2,7,11,15], found `{0}`")]
    MissingBrackets(String),
    #[error("missing target after the value list in `{0}`")]
    MissingTarget(String),
    #[error("`{0}` is not an integer")]
    InvalidInteger(String),
}

#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("failed to read test case file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse test case file {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize test cases for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write test case file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
