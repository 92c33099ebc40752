//! Configuration for building a query rewriter.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{QuotedPhraseTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::error::{Result, SynonymError};
use crate::rewrite::{QueryRewriter, QueryRewriterBuilder};
use crate::synonym::SynonymDictionary;

/// Tokenizer selection.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Whitespace segmentation that keeps quoted phrases together
    #[default]
    Quoted,
    /// Plain whitespace segmentation
    Whitespace,
}

impl TokenizerKind {
    /// Instantiate the selected tokenizer.
    pub fn build(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Quoted => Box::new(QuotedPhraseTokenizer::new()),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer::new()),
        }
    }
}

/// Configuration for a [`QueryRewriter`].
///
/// Example file:
///
/// ```json
/// {
///   "dictionary_path": "resources/synonyms.json",
///   "tokenizer": "quoted",
///   "trace": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewriterConfig {
    /// Path to the JSON synonym source.
    pub dictionary_path: Option<PathBuf>,

    /// Tokenizer used to segment queries.
    pub tokenizer: TokenizerKind,

    /// Whether rewrite events are reported through `tracing`.
    pub trace: bool,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            tokenizer: TokenizerKind::Quoted,
            trace: true,
        }
    }
}

impl RewriterConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SynonymError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| SynonymError::config(format!("Invalid rewriter configuration: {e}")))
    }

    /// Set the dictionary path.
    pub fn with_dictionary_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    /// Set the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Load the configured dictionary.
    pub fn load_dictionary(&self) -> Result<SynonymDictionary> {
        let path = self
            .dictionary_path
            .as_ref()
            .ok_or_else(|| SynonymError::config("dictionary_path is not set"))?;
        SynonymDictionary::load_from_file(path)
    }

    /// Load the dictionary and build a rewriter from this configuration.
    pub fn build_rewriter(&self) -> Result<QueryRewriter> {
        let dictionary = self.load_dictionary()?;
        let builder = QueryRewriterBuilder::new(dictionary).tokenizer(self.tokenizer.build());
        let builder = if self.trace {
            builder
        } else {
            builder.without_trace()
        };
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RewriterConfig::default();
        assert!(config.dictionary_path.is_none());
        assert_eq!(config.tokenizer, TokenizerKind::Quoted);
        assert!(config.trace);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = RewriterConfig::from_json_str(r#"{"tokenizer": "whitespace"}"#).unwrap();
        assert_eq!(config.tokenizer, TokenizerKind::Whitespace);
        assert!(config.trace);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = RewriterConfig::from_json_str(r#"{"dictionary": "x.json"}"#).unwrap_err();
        assert!(matches!(err, SynonymError::Config(_)));
    }

    #[test]
    fn test_missing_dictionary_path() {
        let err = RewriterConfig::default().build_rewriter().unwrap_err();
        assert!(matches!(err, SynonymError::Config(_)));
    }

    #[test]
    fn test_build_rewriter_from_resource() {
        let rewriter = RewriterConfig::default()
            .with_dictionary_path("resources/synonyms.json")
            .with_tokenizer(TokenizerKind::Whitespace)
            .build_rewriter()
            .unwrap();
        assert_eq!(rewriter.tokenizer_name(), "whitespace");
        assert_eq!(
            rewriter.rewrite("red phone"),
            "(red (phone OR telephone OR мобильный))"
        );
    }
}
