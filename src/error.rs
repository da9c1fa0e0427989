//! Error types for the tokenflow library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TokenflowError`] enum.
//!
//! # Examples
//!
//! ```
//! use tokenflow::error::{Result, TokenflowError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TokenflowError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tokenflow operations.
#[derive(Error, Debug)]
pub enum TokenflowError {
    /// I/O errors raised while reading analyzer input or config files.
    /// Invalid UTF-8 input also lands here.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stage produced inconsistent token state, such as a span whose
    /// corrected start lies past its end.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors (bad versions, invalid limits, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TokenflowError.
pub type Result<T> = std::result::Result<T, TokenflowError>;

impl TokenflowError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TokenflowError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TokenflowError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TokenflowError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TokenflowError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
