//! # synrewrite
//!
//! Synonym-aware query rewriting for boolean search engines.
//!
//! ## Features
//!
//! - Dictionary built from grouped synonym data (list of groups or canonical map)
//! - Quote-aware query tokenization
//! - Longest-match resolution of two-word phrases before single words
//! - Reassembly into `(a OR b OR "c d")` groups, untouched queries returned as-is
//! - Read-only dictionary shared across threads, reloaded by build-then-swap
//!
//! ## Example
//!
//! ```
//! use synrewrite::rewrite::QueryRewriter;
//! use synrewrite::synonym::SynonymDictionary;
//!
//! let dict = SynonymDictionary::from_json_str(r#"{"phone": ["telephone", "мобильный"]}"#)?;
//! let rewriter = QueryRewriter::builder(dict).build();
//!
//! assert_eq!(
//!     rewriter.rewrite("red phone"),
//!     "(red (phone OR telephone OR мобильный))"
//! );
//! # Ok::<(), synrewrite::error::SynonymError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod rewrite;
pub mod synonym;

pub mod prelude {
    pub use crate::config::{RewriterConfig, TokenizerKind};
    pub use crate::error::{Result, SynonymError};
    pub use crate::rewrite::{QueryRewriter, QueryRewriterBuilder, Rewrite, rewrite};
    pub use crate::synonym::{SharedDictionary, SynonymDictionary, SynonymGroup};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
