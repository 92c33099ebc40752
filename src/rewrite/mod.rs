//! Synonym-aware query rewriting.
//!
//! The rewrite pipeline has three stages:
//! - A [`Tokenizer`](crate::analysis::tokenizer::Tokenizer) segments the query
//! - The [`Resolver`] finds the longest dictionary match at each position
//! - The rewriter reassembles the query with `(a OR b OR "c d")` groups
//!
//! # Example
//!
//! ```
//! use synrewrite::rewrite::QueryRewriter;
//! use synrewrite::synonym::SynonymDictionary;
//!
//! let dict = SynonymDictionary::from_groups(vec![vec!["phone", "telephone"]]);
//! let rewriter = QueryRewriter::builder(dict).build();
//!
//! assert_eq!(rewriter.rewrite("red phone"), "(red (phone OR telephone))");
//! assert_eq!(rewriter.rewrite("red car"), "red car");
//! ```

mod builder;
mod resolver;
mod rewriter;
mod trace;

pub use builder::QueryRewriterBuilder;
pub use resolver::{MAX_PHRASE_TOKENS, Resolution, Resolver};
pub use rewriter::{MatchedSpan, QueryRewriter, Rewrite, rewrite, rewrite_with};
pub use trace::{NoopTrace, RewriteTrace, TracingTrace};
