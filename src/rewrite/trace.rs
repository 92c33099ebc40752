//! Observation hook for the rewrite pipeline.

use tracing::{debug, trace};

use crate::analysis::token::Token;
use crate::synonym::SynonymGroup;

/// Callbacks invoked at fixed points of a rewrite.
///
/// Every method has an empty default body. Implementations only observe;
/// nothing they do can alter the rewritten query.
pub trait RewriteTrace: Send + Sync {
    /// The query was segmented into `tokens`.
    fn tokens(&self, _query: &str, _tokens: &[Token]) {}

    /// `tokens` (one or two of them) resolved to `group` via `key`.
    fn matched(&self, _tokens: &[Token], _key: &str, _group: &SynonymGroup) {}

    /// `token` had no synonym group and is emitted as written.
    fn passthrough(&self, _token: &Token) {}

    /// The rewrite finished. `rewritten` equals `query` when nothing matched.
    fn finished(&self, _query: &str, _rewritten: &str, _matched: bool) {}

    /// Get the name of this hook for debugging.
    fn name(&self) -> &str;
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl RewriteTrace for NoopTrace {
    fn name(&self) -> &str {
        "noop"
    }
}

/// Forwards events to `tracing` at `trace` and `debug` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTrace;

impl RewriteTrace for TracingTrace {
    fn tokens(&self, query: &str, tokens: &[Token]) {
        trace!(
            query,
            count = tokens.len(),
            tokens = ?tokens.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "Tokenized query"
        );
    }

    fn matched(&self, tokens: &[Token], key: &str, group: &SynonymGroup) {
        trace!(
            key,
            consumed = tokens.len(),
            canonical = group.canonical(),
            members = group.len(),
            "Matched synonym group"
        );
    }

    fn passthrough(&self, token: &Token) {
        trace!(token = %token, "No synonym group, keeping token");
    }

    fn finished(&self, query: &str, rewritten: &str, matched: bool) {
        if matched {
            debug!(query, rewritten, "Query rewritten");
        } else {
            debug!(query, "No synonyms found, query unchanged");
        }
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
