//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` or wrap it as one variant, whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `sc-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid distribution parameter: {0}")]
    Distribution(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `sc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
