//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers problems with
//! the shared configuration.

use thiserror::Error;

/// The error type for `tc-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
