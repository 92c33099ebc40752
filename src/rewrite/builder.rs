//! Builder for creating QueryRewriter instances.

use std::sync::Arc;

use crate::analysis::tokenizer::{QuotedPhraseTokenizer, Tokenizer};
use crate::synonym::SharedDictionary;

use super::rewriter::QueryRewriter;
use super::trace::{NoopTrace, RewriteTrace, TracingTrace};

/// Builder for creating `QueryRewriter` instances.
///
/// Defaults to the quote-aware tokenizer and the `tracing` trace hook.
///
/// # Example
///
/// ```
/// use synrewrite::analysis::tokenizer::WhitespaceTokenizer;
/// use synrewrite::rewrite::QueryRewriterBuilder;
/// use synrewrite::synonym::SynonymDictionary;
///
/// let dict = SynonymDictionary::from_groups(vec![vec!["phone", "telephone"]]);
/// let rewriter = QueryRewriterBuilder::new(dict)
///     .tokenizer(Box::new(WhitespaceTokenizer::new()))
///     .without_trace()
///     .build();
///
/// assert_eq!(rewriter.tokenizer_name(), "whitespace");
/// assert_eq!(rewriter.trace_name(), "noop");
/// ```
pub struct QueryRewriterBuilder {
    dictionary: SharedDictionary,
    tokenizer: Box<dyn Tokenizer>,
    trace: Arc<dyn RewriteTrace>,
}

impl QueryRewriterBuilder {
    /// Create a new builder over the given dictionary.
    pub fn new(dictionary: impl Into<SharedDictionary>) -> Self {
        Self {
            dictionary: dictionary.into(),
            tokenizer: Box::new(QuotedPhraseTokenizer::new()),
            trace: Arc::new(TracingTrace),
        }
    }

    /// Set the tokenizer used to segment queries.
    pub fn tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set a custom trace hook.
    pub fn trace(mut self, trace: Arc<dyn RewriteTrace>) -> Self {
        self.trace = trace;
        self
    }

    /// Disable tracing.
    pub fn without_trace(self) -> Self {
        self.trace(Arc::new(NoopTrace))
    }

    /// Build the `QueryRewriter` instance.
    pub fn build(self) -> QueryRewriter {
        QueryRewriter::new(self.dictionary, self.tokenizer, self.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonym::SynonymDictionary;

    #[test]
    fn test_builder_defaults() {
        let rewriter = QueryRewriterBuilder::new(SynonymDictionary::new()).build();
        assert_eq!(rewriter.tokenizer_name(), "quoted_phrase");
        assert_eq!(rewriter.trace_name(), "tracing");
    }

    #[test]
    fn test_builder_shares_dictionary_handle() {
        let shared = SharedDictionary::default();
        let rewriter = QueryRewriterBuilder::new(shared.clone()).build();

        shared.swap(SynonymDictionary::from_groups(vec![vec!["a", "b"]]));
        assert_eq!(rewriter.rewrite("a"), "((a OR b))");
    }
}
