//! Error types for menu resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the text of a menu or extras source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to fetch {url}: {source}")]
    Http { url: String, source: reqwest::Error },
}

/// Failure to turn a source into menu data.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("malformed sheet: {0}")]
    Csv(#[from] csv::Error),
}

/// A command row that cannot be turned into a cart command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("line {line}: unrecognized operation '{op}'")]
    UnrecognizedOp { line: usize, op: String },

    #[error("line {line}: {op} missing product")]
    MissingProduct { line: usize, op: String },

    #[error("line {line}: unknown product '{product}'")]
    UnknownProduct { line: usize, product: String },

    #[error("line {line}: product '{product}' does not offer extras")]
    ExtrasNotOffered { line: usize, product: String },

    #[error("line {line}: extra '{extra}' is not available for product '{product}'")]
    UnknownExtra {
        line: usize,
        product: String,
        extra: String,
    },
}
