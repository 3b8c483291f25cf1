//! Error types for the Taglink library.
//!
//! All errors are represented by the [`TaglinkError`] enum. Tokenizing and
//! encoding never fail on valid Unicode input; errors come from building a
//! tokenizer, loading configuration, or decoding a ref that was never
//! produced by [`crate::codec::encode`].
//!
//! # Examples
//!
//! ```
//! use taglink::error::{Result, TaglinkError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TaglinkError::decode("dangling escape"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Taglink operations.
#[derive(Error, Debug)]
pub enum TaglinkError {
    /// The tokenizer's matching rule could not be compiled.
    #[error("Pattern compile error: {0}")]
    PatternCompile(String),

    /// A ref or link target does not correspond to encoded output.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A match's codepoint range does not slice the source text.
    #[error("Range mapping error: {0}")]
    RangeMapping(String),

    /// Configuration values are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TaglinkError.
pub type Result<T> = std::result::Result<T, TaglinkError>;

impl TaglinkError {
    /// Create a new pattern compile error.
    pub fn pattern_compile<S: Into<String>>(msg: S) -> Self {
        TaglinkError::PatternCompile(msg.into())
    }

    /// Create a new decode error.
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        TaglinkError::Decode(msg.into())
    }

    /// Create a new range mapping error.
    pub fn range_mapping<S: Into<String>>(msg: S) -> Self {
        TaglinkError::RangeMapping(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TaglinkError::InvalidConfig(msg.into())
    }
}
