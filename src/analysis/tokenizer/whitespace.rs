//! Whitespace tokenizer implementation.

use super::{Tokenizer, push_token};

use crate::analysis::token::Token;

/// A tokenizer that splits text on whitespace only.
///
/// Quotation marks are ordinary characters here, so `"blue widget"` becomes
/// the two tokens `"blue` and `widget"`. Useful for query languages where
/// quotes carry no phrase meaning.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(begin) = start.take() {
                    push_token(&mut tokens, text, begin, offset, false);
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }

        if let Some(begin) = start {
            push_token(&mut tokens, text, begin, text.len(), false);
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
