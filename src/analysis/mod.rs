//! Query text analysis for synrewrite.
//!
//! This module provides the tokenization stage of the rewriter and the shared
//! normalization utilities that make dictionary keys and query tokens
//! comparable.

pub mod normalize;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use normalize::*;
pub use token::*;
pub use tokenizer::*;
