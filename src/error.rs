//! Error types for the synrewrite library.
//!
//! All errors are represented by the [`SynonymError`] enum. Only dictionary
//! construction and configuration can fail; rewriting a query is total and
//! never produces an error.
//!
//! # Examples
//!
//! ```
//! use synrewrite::error::{SynonymError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynonymError::load("group 0 is not an array"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for synrewrite operations.
#[derive(Error, Debug)]
pub enum SynonymError {
    /// The synonym source could not be read or parsed into group structure.
    ///
    /// This is fatal at startup: a rewriter is never built on top of a
    /// partially loaded dictionary.
    #[error("Load error: {0}")]
    Load(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for operations that may fail with SynonymError.
pub type Result<T> = std::result::Result<T, SynonymError>;

impl SynonymError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        SynonymError::Load(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SynonymError::Config(msg.into())
    }

    /// Whether this error came from loading a synonym source.
    pub fn is_load(&self) -> bool {
        matches!(self, SynonymError::Load(_))
    }
}
