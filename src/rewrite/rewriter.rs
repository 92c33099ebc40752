//! Query rewriting: tokenize, resolve, and reassemble a boolean query.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::normalize::normalize_term;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{QuotedPhraseTokenizer, Tokenizer};
use crate::synonym::{SharedDictionary, SynonymDictionary};

use super::builder::QueryRewriterBuilder;
use super::resolver::Resolver;
use super::trace::{NoopTrace, RewriteTrace};

/// A run of tokens that was replaced by a synonym disjunction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedSpan {
    /// Position of the first token in the span.
    pub position: usize,
    /// Number of tokens replaced.
    pub tokens: usize,
    /// Normalized lookup key that matched.
    pub key: String,
    /// Canonical member of the matched group.
    pub canonical: String,
    /// The disjunction emitted in place of the span.
    pub expansion: String,
}

/// Outcome of rewriting one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewrite {
    /// The query handed to the rewriter.
    pub original: String,
    /// The rewritten query; identical to `original` when nothing matched.
    pub query: String,
    /// Spans that were expanded, in query order.
    pub matched: Vec<MatchedSpan>,
}

impl Rewrite {
    /// Whether any synonym group matched.
    pub fn is_changed(&self) -> bool {
        !self.matched.is_empty()
    }

    fn unchanged(query: &str) -> Self {
        Rewrite {
            original: query.to_string(),
            query: query.to_string(),
            matched: Vec::new(),
        }
    }
}

/// Rewrite `query` against `dictionary` with the default quote-aware tokenizer.
///
/// Recognized terms and two-word phrases become parenthesized `OR` groups and
/// the whole expression is wrapped in one more pair of parentheses. A query
/// with no recognized terms comes back byte-for-byte unchanged.
///
/// ```
/// use synrewrite::rewrite::rewrite;
/// use synrewrite::synonym::SynonymDictionary;
///
/// let dict = SynonymDictionary::from_groups(vec![vec!["phone", "telephone", "мобильный"]]);
/// assert_eq!(rewrite("red phone", &dict), "(red (phone OR telephone OR мобильный))");
/// assert_eq!(rewrite("red car", &dict), "red car");
/// ```
pub fn rewrite(query: &str, dictionary: &SynonymDictionary) -> String {
    rewrite_with(query, dictionary, &QuotedPhraseTokenizer, &NoopTrace).query
}

/// Rewrite with an explicit tokenizer and trace hook.
pub fn rewrite_with(
    query: &str,
    dictionary: &SynonymDictionary,
    tokenizer: &dyn Tokenizer,
    trace: &dyn RewriteTrace,
) -> Rewrite {
    if query.trim().is_empty() {
        trace.finished(query, query, false);
        return Rewrite::unchanged(query);
    }

    let tokens = tokenizer.tokenize(query);
    trace.tokens(query, &tokens);

    let keys: Vec<String> = tokens
        .iter()
        .map(|token| normalize_term(&token.text))
        .collect();
    let resolver = Resolver::new(dictionary);

    let mut segments: Vec<String> = Vec::with_capacity(tokens.len());
    let mut matched = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        match resolver.resolve_keys(&keys, index) {
            Some(resolution) => {
                let span = &tokens[index..index + resolution.consumed];
                trace.matched(span, &resolution.key, resolution.group);

                let expansion = resolution.group.to_disjunction();
                segments.push(expansion.clone());
                matched.push(MatchedSpan {
                    position: index,
                    tokens: resolution.consumed,
                    key: resolution.key,
                    canonical: resolution.group.canonical().to_string(),
                    expansion,
                });
                index += resolution.consumed;
            }
            None => {
                let token = &tokens[index];
                trace.passthrough(token);
                segments.push(render_unmatched(token));
                index += 1;
            }
        }
    }

    if matched.is_empty() {
        trace.finished(query, query, false);
        return Rewrite::unchanged(query);
    }

    let rewritten = format!("({})", segments.join(" "));
    trace.finished(query, &rewritten, true);

    Rewrite {
        original: query.to_string(),
        query: rewritten,
        matched,
    }
}

/// Echo an unmatched token, restoring quotes around quoted phrases.
fn render_unmatched(token: &Token) -> String {
    token.to_string()
}

/// Synonym query rewriter bound to a dictionary, tokenizer, and trace hook.
///
/// The rewriter is `Send + Sync`; one instance can serve any number of
/// concurrent calls. Each call reads one dictionary snapshot, so a
/// [`QueryRewriter::reload`] never affects a call already in progress.
///
/// # Examples
///
/// ```
/// use synrewrite::rewrite::QueryRewriter;
/// use synrewrite::synonym::SynonymDictionary;
///
/// let dict = SynonymDictionary::from_groups(vec![vec!["air pods", "airpods", "earbuds"]]);
/// let rewriter = QueryRewriter::builder(dict).build();
///
/// assert_eq!(
///     rewriter.rewrite("air pods case"),
///     "((\"air pods\" OR airpods OR earbuds) case)"
/// );
/// ```
pub struct QueryRewriter {
    pub(super) dictionary: SharedDictionary,
    pub(super) tokenizer: Box<dyn Tokenizer>,
    pub(super) trace: Arc<dyn RewriteTrace>,
}

impl QueryRewriter {
    /// Create a new query rewriter.
    ///
    /// This constructor is typically not called directly. Use `QueryRewriterBuilder` instead.
    pub fn new(
        dictionary: SharedDictionary,
        tokenizer: Box<dyn Tokenizer>,
        trace: Arc<dyn RewriteTrace>,
    ) -> Self {
        QueryRewriter {
            dictionary,
            tokenizer,
            trace,
        }
    }

    /// Create a new builder for a query rewriter.
    pub fn builder(dictionary: impl Into<SharedDictionary>) -> QueryRewriterBuilder {
        QueryRewriterBuilder::new(dictionary)
    }

    /// Rewrite a single query.
    pub fn rewrite(&self, query: &str) -> String {
        self.rewrite_detailed(query).query
    }

    /// Rewrite a single query and report which spans matched.
    pub fn rewrite_detailed(&self, query: &str) -> Rewrite {
        let dictionary = self.dictionary.snapshot();
        rewrite_with(
            query,
            &dictionary,
            self.tokenizer.as_ref(),
            self.trace.as_ref(),
        )
    }

    /// Rewrite many queries in parallel; results keep the input order.
    ///
    /// The whole batch reads one dictionary snapshot.
    pub fn rewrite_batch<S>(&self, queries: &[S]) -> Vec<Rewrite>
    where
        S: AsRef<str> + Sync,
    {
        let dictionary = self.dictionary.snapshot();
        let tokenizer = self.tokenizer.as_ref();
        let trace = self.trace.as_ref();
        queries
            .par_iter()
            .map(|query| rewrite_with(query.as_ref(), &dictionary, tokenizer, trace))
            .collect()
    }

    /// Install a new, fully built dictionary for subsequent calls.
    pub fn reload(&self, dictionary: SynonymDictionary) -> Arc<SynonymDictionary> {
        self.dictionary.swap(dictionary)
    }

    /// The dictionary handle this rewriter reads from.
    pub fn dictionary(&self) -> &SharedDictionary {
        &self.dictionary
    }

    /// Name of the configured tokenizer.
    pub fn tokenizer_name(&self) -> &'static str {
        self.tokenizer.name()
    }

    /// Name of the configured trace hook.
    pub fn trace_name(&self) -> &str {
        self.trace.name()
    }
}

impl std::fmt::Debug for QueryRewriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryRewriter")
            .field("terms", &self.dictionary.snapshot().len())
            .field("tokenizer", &self.tokenizer.name())
            .field("trace", &self.trace.name())
            .finish()
    }
}
