//! Error types for description parsing and validation.
//!
//! Two kinds only:
//! - `ParseError`: the input is not a structurally sound description
//! - `ValidationError`: the structure is fine but an invariant is violated

use thiserror::Error;

pub type WaveResult<T> = Result<T, WaveError>;

#[derive(Error, Debug)]
pub enum WaveError {
    #[error("invalid description: {0}")]
    Validation(#[from] ValidationError),

    #[error("malformed description: {0}")]
    Parse(#[from] ParseError),
}

/// Structurally well-formed input that breaks a semantic invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description must contain at least one signal")]
    EmptySignals,

    #[error("edge {index} ({text:?}) references unknown node '{node}'")]
    UnknownNode {
        index: usize,
        text: String,
        node: char,
    },

    #[error("edge {index} ({text:?}) references node '{node}', which is placed {count} times")]
    AmbiguousNode {
        index: usize,
        text: String,
        node: char,
        count: usize,
    },
}

/// Input that cannot be read as a description at all.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString { offset: usize },

    #[error("unterminated block comment starting at byte {offset}")]
    UnterminatedComment { offset: usize },
}
