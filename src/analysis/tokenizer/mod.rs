//! Tokenizer implementations for query rewriting.
//!
//! Tokenizers segment a raw query string into an ordered sequence of
//! [`Token`]s. They never fail and never normalize: casing is preserved so
//! that unmatched tokens can be echoed back exactly as the caller wrote them.
//!
//! # Available Tokenizers
//!
//! - [`quoted::QuotedPhraseTokenizer`] - Whitespace segmentation that keeps
//!   double-quoted phrases together (default)
//! - [`whitespace::WhitespaceTokenizer`] - Plain whitespace segmentation where
//!   `"` is an ordinary character
//!
//! # Examples
//!
//! ```
//! use synrewrite::analysis::tokenizer::{QuotedPhraseTokenizer, Tokenizer};
//!
//! let tokenizer = QuotedPhraseTokenizer::new();
//! let tokens = tokenizer.tokenize("\"blue widget\" sale");
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "blue widget");
//! assert!(tokens[0].quoted);
//! ```

use crate::analysis::token::Token;

/// Trait for tokenizers that convert query text into tokens.
///
/// The trait requires `Send + Sync` so a single tokenizer can be shared by
/// every rewrite call.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered sequence of tokens.
    ///
    /// Tokens made only of whitespace are never produced and empty input
    /// yields an empty sequence.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Append `text[start..end]` to `tokens` unless it is blank.
pub(crate) fn push_token(
    tokens: &mut Vec<Token>,
    text: &str,
    start: usize,
    end: usize,
    quoted: bool,
) {
    let slice = &text[start..end];
    if slice.trim().is_empty() {
        return;
    }
    let mut token = Token::with_offsets(slice, tokens.len(), start, end);
    token.quoted = quoted;
    tokens.push(token);
}

// Individual tokenizer modules
pub mod quoted;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use quoted::QuotedPhraseTokenizer;
pub use whitespace::WhitespaceTokenizer;
