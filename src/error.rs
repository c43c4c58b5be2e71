//! # Error Types
//!
//! This module defines error types used throughout the placard library.

use thiserror::Error;

/// Main error type for placard operations
#[derive(Debug, Error)]
pub enum LabelError {
    /// Uploaded file could not be decomposed into delimited rows
    #[error("Parse error: {0}")]
    Parse(String),

    /// Card quantity outside `1..=MAX_QUANTITY`
    #[error("Invalid quantity: {0} (must be 1 to {max})", max = crate::catalog::MAX_QUANTITY)]
    InvalidQuantity(u32),

    /// No card with this id in the catalog
    #[error("Card not found: {0}")]
    CardNotFound(String),

    /// Logo image loading or decoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Document assembly error (stream compression)
    #[error("Document error: {0}")]
    Document(String),

    /// Network-level errors (bind, serve)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for LabelError {
    fn from(err: csv::Error) -> Self {
        match err.position() {
            Some(pos) => LabelError::Parse(format!("line {}: {}", pos.line(), err)),
            None => LabelError::Parse(err.to_string()),
        }
    }
}

/// Result alias for placard operations
pub type Result<T> = std::result::Result<T, LabelError>;
