//! Normalization shared by the dictionary builder and the resolver.
//!
//! A lookup key is lower-cased, trimmed, and has every internal whitespace
//! run collapsed to a single ASCII space. Both dictionary members and query
//! tokens pass through [`normalize_term`] so they compare byte-for-byte.

/// Normalize a term or phrase into its lookup key.
///
/// # Examples
///
/// ```
/// use synrewrite::analysis::normalize::normalize_term;
///
/// assert_eq!(normalize_term("  Air \t PODS "), "air pods");
/// assert_eq!(normalize_term("Телефон"), "телефон");
/// assert_eq!(normalize_term("   "), "");
/// ```
pub fn normalize_term(term: &str) -> String {
    let mut key = String::with_capacity(term.len());
    for word in term.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        key.push_str(&word.to_lowercase());
    }
    key
}

/// Join two already-normalized keys into a phrase key.
pub fn phrase_key(first: &str, second: &str) -> String {
    let mut key = String::with_capacity(first.len() + second.len() + 1);
    key.push_str(first);
    key.push(' ');
    key.push_str(second);
    key
}

/// Whether a normalized term spans more than one word.
pub fn is_multi_word(term: &str) -> bool {
    term.chars().any(char::is_whitespace)
}

/// Number of whitespace-separated words in a term.
pub fn word_count(term: &str) -> usize {
    term.split_whitespace().count()
}
