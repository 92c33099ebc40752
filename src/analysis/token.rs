//! Token type produced by query tokenizers.
//!
//! A [`Token`] is a slice of the source query plus a flag recording whether
//! it was delimited by double quotes. Tokenizers do not normalize text, so
//! the original casing survives for tokens that are echoed back unexpanded.
//!
//! # Examples
//!
//! ```
//! use synrewrite::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert!(!token.quoted);
//!
//! let phrase = Token::with_offsets("blue widget", 0, 1, 12).quoted();
//! assert!(phrase.quoted);
//! assert_eq!(phrase.to_string(), "\"blue widget\"");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of query text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token, exactly as it appears in the query
    /// (without the surrounding quotes for quoted phrases).
    pub text: String,

    /// The position of the token in the token sequence (0-based)
    pub position: usize,

    /// The byte offset where the token text starts in the original query
    pub start_offset: usize,

    /// The byte offset where the token text ends in the original query
    pub end_offset: usize,

    /// Whether the token was delimited by double quotes in the query.
    ///
    /// A quoted token that is emitted unexpanded keeps its quotes.
    pub quoted: bool,
}

impl Token {
    /// Create a new unquoted token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            quoted: false,
        }
    }

    /// Create a new unquoted token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            quoted: false,
        }
    }

    /// Mark this token as a quoted phrase.
    pub fn quoted(mut self) -> Self {
        self.quoted = true;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the token text is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Renders the token as it would be re-emitted in a rewritten query.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "\"{}\"", self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}
