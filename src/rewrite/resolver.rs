//! Longest-match resolution of tokens against the dictionary.

use crate::analysis::normalize::{normalize_term, phrase_key};
use crate::analysis::token::Token;
use crate::synonym::{SynonymDictionary, SynonymGroup};

/// Longest phrase, in tokens, the resolver tries.
pub const MAX_PHRASE_TOKENS: usize = 2;

/// A group matched at some token position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'d> {
    /// The matched group.
    pub group: &'d SynonymGroup,
    /// Number of tokens the match covers (1 or 2).
    pub consumed: usize,
    /// The normalized key that hit.
    pub key: String,
}

/// Resolves token positions to synonym groups.
///
/// At each position a two-token phrase is tried before the single token, so
/// a word never shadows a two-word entry that starts with it.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'d> {
    dictionary: &'d SynonymDictionary,
}

impl<'d> Resolver<'d> {
    /// Create a resolver over `dictionary`.
    pub fn new(dictionary: &'d SynonymDictionary) -> Self {
        Resolver { dictionary }
    }

    /// Resolve the tokens starting at `index`.
    pub fn resolve(&self, tokens: &[Token], index: usize) -> Option<Resolution<'d>> {
        let keys: Vec<String> = tokens
            .iter()
            .skip(index)
            .take(MAX_PHRASE_TOKENS)
            .map(|token| normalize_term(&token.text))
            .collect();
        self.resolve_keys(&keys, 0)
    }

    /// Resolve using keys already produced by [`normalize_term`], one per token.
    pub fn resolve_keys(&self, keys: &[String], index: usize) -> Option<Resolution<'d>> {
        let first = keys.get(index)?;

        if let Some(second) = keys.get(index + 1) {
            let key = phrase_key(first, second);
            if let Some(group) = self.dictionary.lookup_normalized(&key) {
                return Some(Resolution {
                    group,
                    consumed: 2,
                    key,
                });
            }
        }

        self.dictionary
            .lookup_normalized(first)
            .map(|group| Resolution {
                group,
                consumed: 1,
                key: first.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{QuotedPhraseTokenizer, Tokenizer};

    fn dictionary() -> SynonymDictionary {
        SynonymDictionary::from_groups(vec![
            vec!["air pods", "airpods", "earbuds"],
            vec!["pods", "capsules"],
            vec!["phone", "telephone"],
        ])
    }

    #[test]
    fn test_phrase_before_word() {
        let dict = dictionary();
        let tokens = QuotedPhraseTokenizer::new().tokenize("Air Pods case");
        let resolution = Resolver::new(&dict).resolve(&tokens, 0).unwrap();

        assert_eq!(resolution.consumed, 2);
        assert_eq!(resolution.key, "air pods");
        assert_eq!(resolution.group.canonical(), "air pods");
    }

    #[test]
    fn test_single_word_fallback() {
        let dict = dictionary();
        let tokens = QuotedPhraseTokenizer::new().tokenize("pods case");
        let resolution = Resolver::new(&dict).resolve(&tokens, 0).unwrap();

        assert_eq!(resolution.consumed, 1);
        assert_eq!(resolution.group.canonical(), "pods");
    }

    #[test]
    fn test_last_token_has_no_phrase() {
        let dict = dictionary();
        let tokens = QuotedPhraseTokenizer::new().tokenize("red phone");
        let resolver = Resolver::new(&dict);

        assert!(resolver.resolve(&tokens, 0).is_none());
        assert_eq!(resolver.resolve(&tokens, 1).unwrap().consumed, 1);
        assert!(resolver.resolve(&tokens, 2).is_none());
    }

    #[test]
    fn test_quoted_phrase_token_resolves_alone() {
        let dict = dictionary();
        let tokens = QuotedPhraseTokenizer::new().tokenize("\"AIR  pods\"");
        let resolution = Resolver::new(&dict).resolve(&tokens, 0).unwrap();

        assert_eq!(resolution.consumed, 1);
        assert_eq!(resolution.key, "air pods");
    }
}
