//! Synonym dictionary mapping normalized terms to their groups.
//!
//! The dictionary keeps two maps: every normalized term points at a group
//! id, and every group id owns the ordered [`SynonymGroup`]. Aliasing many
//! terms onto one group needs no bijection this way.
//!
//! A term declared in more than one raw group belongs to the group declared
//! last. The overwrite is logged and counted, never rejected.

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, trace, warn};

use crate::analysis::normalize::{normalize_term, word_count};
use crate::error::Result;

use super::group::SynonymGroup;
use super::source::RawSynonyms;

/// Index of a group inside a [`SynonymDictionary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub usize);

/// Summary counters for a built dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Groups built from the source, including ones fully shadowed by later groups.
    pub groups: usize,
    /// Distinct lookup keys.
    pub terms: usize,
    /// Term declarations that replaced an earlier group's mapping.
    pub overwritten_terms: usize,
    /// Raw groups skipped because nothing survived normalization.
    pub skipped_groups: usize,
    /// Longest member, in words.
    pub max_phrase_words: usize,
}

/// Immutable synonym index.
///
/// Built once, then shared read-only by every rewrite call.
///
/// # Examples
///
/// ```
/// use synrewrite::synonym::SynonymDictionary;
///
/// let dict = SynonymDictionary::from_groups(vec![
///     vec!["Phone", "telephone"],
///     vec!["air pods", "AirPods"],
/// ]);
///
/// let group = dict.lookup("PHONE").unwrap();
/// assert_eq!(group.members(), &["phone", "telephone"]);
/// assert_eq!(dict.canonical("airpods"), Some("air pods"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    term_to_group: AHashMap<String, GroupId>,
    groups: Vec<SynonymGroup>,
    stats: DictionaryStats,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from either raw source shape.
    pub fn build(raw: RawSynonyms) -> Self {
        Self::from_groups(raw.into_groups())
    }

    /// Build a dictionary from a list of groups.
    pub fn from_groups<G, S>(groups: impl IntoIterator<Item = G>) -> Self
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for (index, terms) in groups.into_iter().enumerate() {
            match SynonymGroup::from_terms(terms) {
                Some(group) => dict.insert_group(group),
                None => {
                    warn!(group = index, "Skipping empty synonym group");
                    dict.stats.skipped_groups += 1;
                }
            }
        }

        dict.stats.terms = dict.term_to_group.len();
        info!(
            groups = dict.stats.groups,
            terms = dict.stats.terms,
            overwritten_terms = dict.stats.overwritten_terms,
            skipped_groups = dict.stats.skipped_groups,
            "Synonym dictionary built"
        );
        dict
    }

    /// Build a dictionary from canonical terms and their alternates.
    ///
    /// The canonical term is always the first member of its group.
    pub fn from_canonical_map<K, V, S>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<(String, Vec<String>)> = entries
            .into_iter()
            .map(|(canonical, alternates)| {
                (
                    canonical.into(),
                    alternates.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self::build(RawSynonyms::Canonical(entries))
    }

    /// Parse a JSON document in either accepted shape and build from it.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(Self::build(RawSynonyms::from_json_str(content)?))
    }

    /// Load a dictionary from a JSON file.
    ///
    /// Any read or parse failure is a [`crate::error::SynonymError::Load`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading synonym dictionary");
        Ok(Self::build(RawSynonyms::load_from_file(path)?))
    }

    fn insert_group(&mut self, group: SynonymGroup) {
        let id = GroupId(self.groups.len());
        for term in group.members() {
            self.stats.max_phrase_words = self.stats.max_phrase_words.max(word_count(term));
            if let Some(previous) = self.term_to_group.insert(term.clone(), id) {
                warn!(
                    term = %term,
                    previous = self.groups[previous.0].canonical(),
                    current = group.canonical(),
                    "Synonym term redeclared, later group wins"
                );
                self.stats.overwritten_terms += 1;
            }
            trace!(term = %term, canonical = group.canonical(), "Mapped synonym term");
        }
        self.groups.push(group);
        self.stats.groups += 1;
    }

    /// Look up the group for a term or phrase, normalizing the key first.
    pub fn lookup(&self, key: &str) -> Option<&SynonymGroup> {
        self.lookup_normalized(&normalize_term(key))
    }

    /// Look up a key that is already normalized.
    pub fn lookup_normalized(&self, key: &str) -> Option<&SynonymGroup> {
        let id = self.term_to_group.get(key)?;
        self.groups.get(id.0)
    }

    /// The canonical member of the group a term resolves to.
    pub fn canonical(&self, key: &str) -> Option<&str> {
        self.lookup(key).map(SynonymGroup::canonical)
    }

    /// The group id a term resolves to.
    pub fn group_id(&self, key: &str) -> Option<GroupId> {
        self.term_to_group.get(&normalize_term(key)).copied()
    }

    /// Get a group by id.
    pub fn group(&self, id: GroupId) -> Option<&SynonymGroup> {
        self.groups.get(id.0)
    }

    /// All groups in build order.
    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    /// Number of distinct lookup keys.
    pub fn len(&self) -> usize {
        self.term_to_group.len()
    }

    /// Check if the dictionary has no lookup keys.
    pub fn is_empty(&self) -> bool {
        self.term_to_group.is_empty()
    }

    /// Longest member in words.
    pub fn max_phrase_words(&self) -> usize {
        self.stats.max_phrase_words
    }

    /// Build statistics.
    pub fn stats(&self) -> &DictionaryStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_dict() -> SynonymDictionary {
        SynonymDictionary::from_groups(vec![vec!["phone", "telephone", "мобильный"]])
    }

    #[test]
    fn test_every_member_is_a_key() {
        let dict = phone_dict();
        for term in ["phone", "telephone", "мобильный"] {
            let group = dict.lookup(term).unwrap();
            assert_eq!(group.members(), &["phone", "telephone", "мобильный"]);
        }
        assert_eq!(dict.len(), 3);
        assert!(dict.lookup("tablet").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = phone_dict();
        assert_eq!(dict.lookup("PHONE"), dict.lookup("phone"));
        assert_eq!(dict.lookup("Мобильный").unwrap().canonical(), "phone");
    }

    #[test]
    fn test_multi_word_keys() {
        let dict = SynonymDictionary::from_groups(vec![vec!["Air  Pods", "airpods", "earbuds"]]);
        assert!(dict.lookup("air pods").is_some());
        assert!(dict.lookup("AIR\tPODS").is_some());
        assert!(dict.lookup("air").is_none());
        assert_eq!(dict.max_phrase_words(), 2);
    }

    #[test]
    fn test_last_write_wins() {
        let dict = SynonymDictionary::from_groups(vec![
            vec!["телефон", "samsung"],
            vec!["самсунг", "samsung", "galaxy"],
        ]);

        assert_eq!(dict.canonical("samsung"), Some("самсунг"));
        assert_eq!(dict.canonical("телефон"), Some("телефон"));
        assert_eq!(dict.lookup("телефон").unwrap().members(), &["телефон", "samsung"]);
        assert_eq!(dict.stats().overwritten_terms, 1);
        assert_eq!(dict.stats().groups, 2);
    }

    #[test]
    fn test_canonical_map_shape_matches_group_shape() {
        let from_map = SynonymDictionary::from_canonical_map(vec![
            ("phone", vec!["telephone", "мобильный"]),
        ]);
        let from_groups = phone_dict();

        for term in ["phone", "telephone", "мобильный", "other"] {
            assert_eq!(from_map.lookup(term), from_groups.lookup(term));
        }
    }

    #[test]
    fn test_canonical_listed_again_in_alternates() {
        let dict = SynonymDictionary::from_canonical_map(vec![("Phone", vec!["phone", "cell"])]);
        assert_eq!(dict.lookup("cell").unwrap().members(), &["phone", "cell"]);
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        let dict = SynonymDictionary::from_groups(vec![vec![], vec!["  "], vec!["case"]]);
        assert_eq!(dict.stats().skipped_groups, 2);
        assert_eq!(dict.groups().len(), 1);
        assert_eq!(dict.lookup("case").unwrap().members(), &["case"]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let source = r#"{"b": ["x", "y"], "a": ["x"], "c": []}"#;
        let first = SynonymDictionary::from_json_str(source).unwrap();
        let second = SynonymDictionary::from_json_str(source).unwrap();

        for term in ["a", "b", "c", "x", "y", "z"] {
            assert_eq!(first.lookup(term), second.lookup(term));
        }
        assert_eq!(first.canonical("x"), Some("a"));
    }

    #[test]
    fn test_group_id_roundtrip() {
        let dict = phone_dict();
        let id = dict.group_id("Telephone").unwrap();
        assert_eq!(dict.group(id).unwrap().canonical(), "phone");
    }
}
