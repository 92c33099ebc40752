//! Quote-aware query tokenizer.

use super::{Tokenizer, push_token};

use crate::analysis::token::Token;

const QUOTE: char = '"';

/// A tokenizer that splits on whitespace but keeps double-quoted phrases
/// together as single tokens.
///
/// A `"` toggles phrase mode. Outside a phrase, whitespace ends the current
/// token; inside a phrase it is kept as part of the token text. Closing a
/// quote emits the accumulated phrase tagged as quoted. An opening quote in
/// the middle of a word first emits the word accumulated so far.
///
/// An unterminated quote is closed implicitly at the end of the input, so the
/// trailing phrase is still emitted as quoted.
#[derive(Clone, Debug, Default)]
pub struct QuotedPhraseTokenizer;

impl QuotedPhraseTokenizer {
    /// Create a new quote-aware tokenizer.
    pub fn new() -> Self {
        QuotedPhraseTokenizer
    }
}

impl Tokenizer for QuotedPhraseTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut in_phrase = false;
        let mut start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            if ch == QUOTE {
                if let Some(begin) = start.take() {
                    push_token(&mut tokens, text, begin, offset, in_phrase);
                }
                in_phrase = !in_phrase;
                continue;
            }

            if ch.is_whitespace() && !in_phrase {
                if let Some(begin) = start.take() {
                    push_token(&mut tokens, text, begin, offset, false);
                }
                continue;
            }

            if start.is_none() {
                start = Some(offset);
            }
        }

        if let Some(begin) = start {
            push_token(&mut tokens, text, begin, text.len(), in_phrase);
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "quoted_phrase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<(&str, bool)> {
        tokens.iter().map(|t| (t.text.as_str(), t.quoted)).collect()
    }

    #[test]
    fn test_plain_words() {
        let tokens = QuotedPhraseTokenizer::new().tokenize("red  phone\tcase");
        assert_eq!(
            texts(&tokens),
            vec![("red", false), ("phone", false), ("case", false)]
        );
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_quoted_phrase() {
        let tokens = QuotedPhraseTokenizer::new().tokenize("\"blue widget\" sale");
        assert_eq!(texts(&tokens), vec![("blue widget", true), ("sale", false)]);
        assert_eq!(tokens[0].start_offset, 1);
        assert_eq!(tokens[0].end_offset, 12);
    }

    #[test]
    fn test_phrase_keeps_inner_whitespace() {
        let tokens = QuotedPhraseTokenizer::new().tokenize("\"air   pods\"");
        assert_eq!(texts(&tokens), vec![("air   pods", true)]);
    }

    #[test]
    fn test_closing_quote_terminates_token() {
        let tokens = QuotedPhraseTokenizer::new().tokenize("\"a b\"c");
        assert_eq!(texts(&tokens), vec![("a b", true), ("c", false)]);
    }

    #[test]
    fn test_opening_quote_mid_word() {
        let tokens = QuotedPhraseTokenizer::new().tokenize("buy\"air pods\"");
        assert_eq!(texts(&tokens), vec![("buy", false), ("air pods", true)]);
    }

    #[test]
    fn test_unterminated_quote() {
        let tokens = QuotedPhraseTokenizer::new().tokenize("case \"air pods");
        assert_eq!(texts(&tokens), vec![("case", false), ("air pods", true)]);
    }

    #[test]
    fn test_blank_phrases_are_dropped() {
        let tokens = QuotedPhraseTokenizer::new().tokenize("\"\" \"   \" phone \"");
        assert_eq!(texts(&tokens), vec![("phone", false)]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let tokenizer = QuotedPhraseTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_non_ascii_offsets() {
        let query = "мобильный \"чехол для\"";
        let tokens = QuotedPhraseTokenizer::new().tokenize(query);
        assert_eq!(texts(&tokens), vec![("мобильный", false), ("чехол для", true)]);
        assert_eq!(&query[tokens[1].start_offset..tokens[1].end_offset], "чехол для");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(QuotedPhraseTokenizer::new().name(), "quoted_phrase");
    }
}
